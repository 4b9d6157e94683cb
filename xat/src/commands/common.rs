//! Common types and utilities for xat commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use xac_util::diagnostic::SourceSnippet;
use xac_util::{Diagnostic, Handler};

// ============================================================================
// Token Listing Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    /// One token per line, human readable
    Text,
    /// JSON array of token records
    Json,
}

impl TokenFormat {
    /// Parse a string into a TokenFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<TokenFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the canonical name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Diagnostic Rendering
// ============================================================================

/// Render a single diagnostic in the compiler's report style.
///
/// Produces a header line with the severity and code, a location line,
/// and, when the affected line is available in `lines`, a source snippet
/// with the offending range underlined. Notes and helps follow.
///
/// # Arguments
/// * `diagnostic` - The diagnostic to render
/// * `path` - Path of the scanned file, used in the location line
/// * `lines` - The source split into lines, for snippet display
pub fn render_diagnostic(diagnostic: &Diagnostic, path: &Path, lines: &[&str]) -> String {
    let mut out = String::new();

    match diagnostic.code {
        Some(code) => out.push_str(&format!(
            "{}[{}]: {}\n",
            diagnostic.level, code, diagnostic.message
        )),
        None => out.push_str(&format!("{}: {}\n", diagnostic.level, diagnostic.message)),
    }
    out.push_str(&format!(
        "  --> {}:{}:{}\n",
        path.display(),
        diagnostic.span.line,
        diagnostic.span.column
    ));

    let line_index = (diagnostic.span.line as usize).checked_sub(1);
    if let Some(line_text) = line_index.and_then(|index| lines.get(index)) {
        let start_column = diagnostic.span.column as usize;
        let end_column = start_column + diagnostic.span.len().max(1);
        let snippet = SourceSnippet::new(
            *line_text,
            diagnostic.span.line as usize,
            start_column,
            end_column,
            None::<String>,
        );
        out.push_str(&snippet.format());
        out.push('\n');
    }

    for note in &diagnostic.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for help in &diagnostic.helps {
        out.push_str(&format!("  = help: {}\n", help));
    }

    out
}

/// Render every diagnostic collected for `path` to stderr.
///
/// Reads the source back for snippet display; if the file can no longer
/// be read the diagnostics are still printed, just without snippets.
pub fn report_diagnostics(handler: &Handler, path: &Path) {
    let diagnostics = handler.diagnostics();
    if diagnostics.is_empty() {
        return;
    }

    let source = std::fs::read_to_string(path).unwrap_or_default();
    let lines: Vec<&str> = source.lines().collect();
    for diagnostic in &diagnostics {
        eprint!("{}", render_diagnostic(diagnostic, path, &lines));
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown output format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format";

    /// Error when files failed lexical analysis.
    pub const FILES_FAILED: &str = "file(s) failed lexical analysis";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output message prefixes.
///
/// These constants provide consistent output markers across all commands.
pub mod output_messages {
    /// Prefix for informational lines.
    pub const INFO: &str = "ℹ️";

    /// Prefix for a file that passed lexical analysis.
    pub const FILE_PASSED: &str = "✅";

    /// Prefix for a file that failed lexical analysis.
    pub const FILE_FAILED: &str = "❌";

    /// Prefix for the per-run summary line.
    pub const SUMMARY: &str = "📊";
}
