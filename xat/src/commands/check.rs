//! Check command implementation.
//!
//! This module runs the scanner over one or more Xa source files and
//! reports a pass or fail line per file, without printing token streams.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use xac_lex::{Scanner, Token};
use xac_util::{FileId, Handler};

use crate::commands::common::{error_messages, output_messages, report_diagnostics};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::Config;
use crate::error::{Result, XatError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file paths.
    pub inputs: Vec<PathBuf>,
}

/// Outcome of scanning a single file.
#[derive(Debug, Clone)]
struct FileReport {
    /// Number of tokens produced, EOF excluded.
    tokens: usize,
    /// Errors reported by the scanner.
    errors: usize,
    /// Warnings reported by the scanner.
    warnings: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] with per-run counts. The result is
    /// marked failed when any file produced scanner errors; warnings
    /// alone do not fail a file.
    pub fn run(&self) -> Result<CommandResult> {
        let start_time = Instant::now();
        self.validate_inputs()?;

        let mut passed = 0;
        let mut failed = 0;
        let mut warnings = Vec::new();
        for (index, input) in self.args.inputs.iter().enumerate() {
            let report = self.check_file(input, FileId::new(index))?;

            if report.errors == 0 {
                passed += 1;
                println!(
                    "{} {}: {} token(s)",
                    output_messages::FILE_PASSED,
                    input.display(),
                    report.tokens
                );
            } else {
                failed += 1;
                println!(
                    "{} {}: {} error(s), {} warning(s)",
                    output_messages::FILE_FAILED,
                    input.display(),
                    report.errors,
                    report.warnings
                );
            }

            if report.warnings > 0 {
                warnings.push(format!("{}: {} warning(s)", input.display(), report.warnings));
            }
        }

        self.print_summary(passed, failed);
        self.log_check_complete(start_time.elapsed(), passed + failed);

        let mut result = if failed == 0 {
            CommandResult::success(())
        } else {
            CommandResult::failure()
        };
        result = result
            .with_items_processed(passed + failed)
            .with_items_failed(failed)
            .with_execution_time_ms(start_time.elapsed().as_millis() as u64);
        for warning in warnings {
            result = result.with_warning(warning);
        }

        Ok(result)
    }

    /// Validate that at least one input was given and that all exist.
    fn validate_inputs(&self) -> Result<()> {
        if self.args.inputs.is_empty() {
            return Err(XatError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        for input in &self.args.inputs {
            if !input.exists() {
                return Err(XatError::Validation(format!(
                    "{}: {}",
                    error_messages::INPUT_PATH_NOT_EXIST,
                    input.display()
                )));
            }
        }

        Ok(())
    }

    /// Scan a single file and collect its diagnostic counts.
    fn check_file(&self, input: &Path, file_id: FileId) -> Result<FileReport> {
        let handler = Handler::new();
        let mut scanner = Scanner::open(input, &handler)
            .map_err(|e| XatError::FileOperation(e.to_string()))?
            .with_file_id(file_id)
            .with_corrected_literal_bounds(self.config.scanner.corrected_literal_bounds);

        let mut tokens = 0;
        while scanner.next_token() != Token::Eof {
            tokens += 1;
        }
        scanner.close();

        report_diagnostics(&handler, input);
        debug!("checked {}: {} token(s)", input.display(), tokens);

        Ok(FileReport {
            tokens,
            errors: handler.error_count(),
            warnings: handler.warning_count(),
        })
    }

    /// Print the final pass/fail summary line.
    fn print_summary(&self, passed: usize, failed: usize) {
        println!(
            "{} Files: {} passed, {} failed",
            output_messages::SUMMARY,
            passed,
            failed
        );
    }

    /// Log check completion if verbose.
    fn log_check_complete(&self, elapsed: std::time::Duration, files: usize) {
        if self.args.verbose {
            eprintln!(
                "{} Checked {} file(s) in {:.2}s",
                output_messages::INFO,
                files,
                elapsed.as_secs_f64()
            );
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check source files for lexical errors"
    }

    fn help() -> &'static str {
        "Scans each input file and reports a pass or fail line per file. \
         Token streams are not printed; use scan for a full listing."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    let command = CheckCommand::new(args, config);
    let result = command.run()?;

    if !result.success {
        return Err(XatError::CommandExecution(format!(
            "{} {}",
            result.items_failed,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}
