//! Scan command implementation.
//!
//! This module tokenizes a single Xa source file and prints the token
//! stream, one token per line or as a JSON array.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use xac_lex::{Scanner, Token};
use xac_util::Handler;

use crate::commands::common::{error_messages, report_diagnostics, TokenFormat};
use crate::commands::traits::{Command, CommandDescription, NoOutput};
use crate::config::Config;
use crate::error::{Result, XatError};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input file path.
    pub input: PathBuf,
    /// Output format override (default: from config).
    pub format: Option<String>,
    /// Include byte offsets in the listing.
    pub show_spans: bool,
    /// Drain over-long integer literals instead of splitting them.
    pub corrected_literal_bounds: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            input: PathBuf::new(),
            format: None,
            show_spans: false,
            corrected_literal_bounds: false,
        }
    }
}

/// One scanned token as it appears in the listing.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRecord {
    /// Token kind name.
    pub kind: String,
    /// Lexeme text, present for identifiers and integer literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub column: u32,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    config: Config,
}

impl ScanCommand {
    /// Create a new ScanCommand.
    pub fn new(args: ScanArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        self.validate_input(&self.args.input)?;
        let format = self.output_format()?;

        let handler = Handler::new();
        let records = self.scan_file(&self.args.input, &handler)?;

        self.print_tokens(&records, format)?;
        report_diagnostics(&handler, &self.args.input);
        self.log_scan_complete(&records, &handler);

        if handler.has_errors() {
            return Err(XatError::CommandExecution(format!(
                "{}: {} error(s)",
                self.args.input.display(),
                handler.error_count()
            )));
        }
        Ok(())
    }

    /// Validate that the input path exists and is a file.
    fn validate_input(&self, input: &Path) -> Result<()> {
        if !input.exists() {
            return Err(XatError::Validation(format!(
                "{}: {}",
                error_messages::INPUT_PATH_NOT_EXIST,
                input.display()
            )));
        }

        if !input.is_file() {
            return Err(XatError::Validation(format!(
                "{}: {}",
                error_messages::INPUT_PATH_NOT_FILE,
                input.display()
            )));
        }

        if input.extension().map_or(true, |ext| ext != "xa") {
            warn!("{} does not have the .xa extension", input.display());
        }

        Ok(())
    }

    /// Resolve the output format from arguments or configuration.
    fn output_format(&self) -> Result<TokenFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.scan.format);

        TokenFormat::from_str(name).ok_or_else(|| {
            XatError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }

    /// Whether over-long integer literals are drained instead of split.
    fn corrected_literal_bounds(&self) -> bool {
        self.args.corrected_literal_bounds || self.config.scanner.corrected_literal_bounds
    }

    /// Whether byte offsets are included in the text listing.
    fn show_spans(&self) -> bool {
        self.args.show_spans || self.config.scan.show_spans
    }

    /// Scan the input file into a list of token records.
    ///
    /// The final record is always the EOF token, so the listing shows
    /// where the scan stopped.
    fn scan_file(&self, input: &Path, handler: &Handler) -> Result<Vec<TokenRecord>> {
        let mut scanner = Scanner::open(input, handler)
            .map_err(|e| XatError::FileOperation(e.to_string()))?
            .with_corrected_literal_bounds(self.corrected_literal_bounds());

        let mut records = Vec::new();
        loop {
            let token = scanner.next_token();
            let span = scanner.token_span();
            records.push(TokenRecord {
                kind: token.kind_name().to_string(),
                text: token.text().map(|symbol| symbol.as_str().to_string()),
                line: span.line,
                column: span.column,
                start: span.start,
                end: span.end,
            });
            if token == Token::Eof {
                break;
            }
        }
        scanner.close();

        debug!(
            "scanned {} token(s) from {}",
            records.len(),
            input.display()
        );
        Ok(records)
    }

    /// Print token records in the selected format.
    fn print_tokens(&self, records: &[TokenRecord], format: TokenFormat) -> Result<()> {
        match format {
            TokenFormat::Text => self.print_text(records),
            TokenFormat::Json => self.print_json(records),
        }
    }

    /// Print records as a line-per-token table.
    fn print_text(&self, records: &[TokenRecord]) -> Result<()> {
        let show_spans = self.show_spans();
        for record in records {
            let mut line = format!(
                "{:>4}:{:<4} {:<12}",
                record.line, record.column, record.kind
            );
            if let Some(ref text) = record.text {
                line.push(' ');
                line.push_str(text);
            }
            if show_spans {
                line.push_str(&format!(" [{}..{}]", record.start, record.end));
            }
            println!("{}", line.trim_end());
        }
        Ok(())
    }

    /// Print records as a pretty JSON array.
    fn print_json(&self, records: &[TokenRecord]) -> Result<()> {
        let rendered = serde_json::to_string_pretty(records)?;
        println!("{}", rendered);
        Ok(())
    }

    /// Log scan completion if verbose.
    fn log_scan_complete(&self, records: &[TokenRecord], handler: &Handler) {
        if self.args.verbose {
            eprintln!(
                "ℹ️ Scanned {} token(s), {} error(s), {} warning(s)",
                records.len().saturating_sub(1),
                handler.error_count(),
                handler.warning_count()
            );
        }
    }
}

impl Command for ScanCommand {
    type Args = ScanArgs;
    type Output = NoOutput;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "scan"
    }
}

impl CommandDescription for ScanCommand {
    fn description() -> &'static str {
        "Scan a source file into a token stream"
    }

    fn help() -> &'static str {
        "Tokenizes the input file and prints one token per line, or a \
         JSON array with --format json. Scanner diagnostics are rendered \
         to stderr; the command fails if any errors were reported."
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs, config: Config) -> Result<()> {
    let command = ScanCommand::new(args, config);
    command.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn command_for(input: PathBuf) -> ScanCommand {
        let args = ScanArgs {
            input,
            ..ScanArgs::default()
        };
        ScanCommand::new(args, Config::default())
    }

    #[test]
    fn test_scan_args_default() {
        let args = ScanArgs::default();
        assert!(!args.verbose);
        assert_eq!(args.input, PathBuf::new());
        assert!(args.format.is_none());
        assert!(!args.show_spans);
        assert!(!args.corrected_literal_bounds);
    }

    #[test]
    fn test_scan_command_name() {
        assert_eq!(<ScanCommand as Command>::name(), "scan");
    }

    #[test]
    fn test_scan_command_description() {
        assert_eq!(
            <ScanCommand as CommandDescription>::description(),
            "Scan a source file into a token stream"
        );
    }

    #[test]
    fn test_output_format_from_args() {
        let args = ScanArgs {
            format: Some("json".to_string()),
            ..ScanArgs::default()
        };
        let command = ScanCommand::new(args, Config::default());

        assert_eq!(command.output_format().unwrap(), TokenFormat::Json);
    }

    #[test]
    fn test_output_format_from_config() {
        let mut config = Config::default();
        config.scan.format = "json".to_string();
        let command = ScanCommand::new(ScanArgs::default(), config);

        assert_eq!(command.output_format().unwrap(), TokenFormat::Json);
    }

    #[test]
    fn test_output_format_unknown() {
        let args = ScanArgs {
            format: Some("yaml".to_string()),
            ..ScanArgs::default()
        };
        let command = ScanCommand::new(args, Config::default());

        let result = command.output_format();
        assert!(matches!(result, Err(XatError::Validation(_))));
    }

    #[test]
    fn test_corrected_literal_bounds_from_config() {
        let mut config = Config::default();
        config.scanner.corrected_literal_bounds = true;
        let command = ScanCommand::new(ScanArgs::default(), config);

        assert!(command.corrected_literal_bounds());
    }

    #[test]
    fn test_scan_file_records() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "program.xa", "OUTPUT x;\n");
        let command = command_for(path.clone());

        let handler = Handler::new();
        let records = command.scan_file(&path, &handler).unwrap();

        let kinds: Vec<&str> = records.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["OUTPUT", "IDENT", "SEMICOLON", "EOF"]);
        assert_eq!(records[1].text.as_deref(), Some("x"));
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].column, 1);
        assert_eq!(records[0].start, 0);
        assert_eq!(records[0].end, 6);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_scan_file_reports_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "bad.xa", "x = @;\n");
        let command = command_for(path.clone());

        let handler = Handler::new();
        let records = command.scan_file(&path, &handler).unwrap();

        assert!(records.iter().any(|r| r.kind == "INVALID"));
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_run_missing_input() {
        let command = command_for(PathBuf::from("/nonexistent/program.xa"));

        let result = command.run();
        assert!(matches!(result, Err(XatError::Validation(_))));
    }

    #[test]
    fn test_run_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "program.xa", "IF x <= 10 { OUTPUT x; }\n");
        let command = command_for(path);

        assert!(command.run().is_ok());
    }

    #[test]
    fn test_run_invalid_char_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "bad.xa", "x = @;\n");
        let command = command_for(path);

        let result = command.run();
        assert!(matches!(result, Err(XatError::CommandExecution(_))));
    }

    #[test]
    fn test_token_record_serializes_without_text() {
        let record = TokenRecord {
            kind: "SEMICOLON".to_string(),
            text: None,
            line: 1,
            column: 1,
            start: 0,
            end: 1,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("text").is_none());
        assert_eq!(value["kind"], "SEMICOLON");
    }
}
