//! Core scanner implementation.
//!
//! This module contains the main Scanner struct and its core methods.

use std::io;
use std::path::Path;

use xac_util::diagnostic::{E_SCAN_UNEXPECTED_CHAR, E_SOURCE_READ};
use xac_util::{DiagnosticBuilder, FileId, Handler, Span};

use crate::cursor::Cursor;
use crate::error::SourceResult;
use crate::source::{CharSource, FileSource};
use crate::token::{Token, MAX_LEXEME_LEN};

/// Scanner for the Xa programming language.
///
/// The scanner pulls characters from a [`CharSource`] and produces a
/// stream of tokens. Malformed input never stops the scan: stray
/// characters become [`Token::Invalid`] and over-long lexemes are
/// truncated, with diagnostics reported through the handler either way.
pub struct Scanner<'h, S> {
    /// Character cursor over the token source.
    pub(crate) cursor: Cursor<S>,

    /// Handler collecting scan diagnostics.
    pub(crate) handler: &'h Handler,

    /// Reusable lexeme buffer for identifiers and integer literals.
    pub(crate) buffer: String,

    /// Starting offset of the current token (in characters).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// File identifier stamped onto diagnostic spans.
    file_id: FileId,

    /// Whether trailing digits beyond the lexeme bound are reported
    /// instead of silently starting a new literal.
    pub(crate) corrected_literal_bounds: bool,
}

impl<'h, S: CharSource> Scanner<'h, S> {
    /// Creates a new scanner over the given source.
    pub fn new(source: S, handler: &'h Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            buffer: String::with_capacity(MAX_LEXEME_LEN),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            file_id: FileId::DUMMY,
            corrected_literal_bounds: false,
        }
    }

    /// Sets the file identifier stamped onto diagnostic spans.
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Enables or disables corrected literal bounds.
    ///
    /// By default an integer literal longer than the lexeme bound is
    /// silently split: the first 20 digits form one literal and the
    /// remaining digits start the next. With corrected bounds the
    /// trailing digits are consumed into the same literal's excess and
    /// each one is reported, matching how over-long identifiers behave.
    pub fn with_corrected_literal_bounds(mut self, corrected: bool) -> Self {
        self.corrected_literal_bounds = corrected;
        self
    }

    /// Returns the next token from the source.
    ///
    /// This is the main entry point for tokenization. Leading
    /// whitespace is skipped, then the scanner dispatches on the
    /// buffered character. At end of input it returns [`Token::Eof`],
    /// and keeps returning it on every further call.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.offset();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if let Some(err) = self.cursor.take_failure() {
            self.report_read_failure(&err);
            return Token::Eof;
        }

        let Some(c) = self.cursor.current() else {
            return Token::Eof;
        };

        match c {
            '(' => {
                self.cursor.advance();
                Token::LParen
            },
            ')' => {
                self.cursor.advance();
                Token::RParen
            },
            '{' => {
                self.cursor.advance();
                Token::LBrace
            },
            '}' => {
                self.cursor.advance();
                Token::RBrace
            },
            ';' => {
                self.cursor.advance();
                Token::Semicolon
            },
            '+' => {
                self.cursor.advance();
                Token::Plus
            },
            '-' => {
                self.cursor.advance();
                Token::Minus
            },
            '*' => {
                self.cursor.advance();
                Token::Star
            },
            '/' => {
                self.cursor.advance();
                Token::Slash
            },
            '%' => {
                self.cursor.advance();
                Token::Percent
            },
            '=' => self.scan_equals(),
            '!' => self.scan_bang(),
            '&' => self.scan_ampersand(),
            '|' => self.scan_pipe(),
            '<' => self.scan_less(),
            '>' => self.scan_greater(),
            c if c.is_ascii_alphabetic() => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            c => {
                self.cursor.advance();
                self.report_unexpected_char(c);
                Token::Invalid
            },
        }
    }

    /// Consumes the scanner and releases its source.
    ///
    /// Dropping the scanner has the same effect; this method exists so
    /// the end of scanning can be made explicit at the call site.
    pub fn close(self) {}

    /// Returns the span of the most recently returned token.
    ///
    /// Only valid between a `next_token` call and the next one; each
    /// call overwrites the recorded start position.
    pub fn token_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.offset(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the span of the character currently buffered in the
    /// lookahead.
    pub(crate) fn current_char_span(&self) -> Span {
        let offset = self.cursor.offset();
        Span::with_file(
            offset,
            offset + 1,
            self.file_id,
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    /// Reports an unrecognized character at the current token position.
    ///
    /// Characters that prefix a digraph get a help suggesting the
    /// two-character form.
    pub(crate) fn report_unexpected_char(&mut self, c: char) {
        let builder = DiagnosticBuilder::error(format!("unexpected character '{}'", c))
            .code(E_SCAN_UNEXPECTED_CHAR)
            .span(self.token_span());
        let builder = match c {
            '!' => builder.help("use '!=' for inequality"),
            '&' => builder.help("use '&&' for logical and"),
            '|' => builder.help("use '||' for logical or"),
            _ => builder,
        };
        builder.emit(self.handler);
    }

    /// Reports a source read failure at the current position.
    fn report_read_failure(&mut self, err: &io::Error) {
        DiagnosticBuilder::error(format!("failed to read source: {}", err))
            .code(E_SOURCE_READ)
            .span(self.token_span())
            .emit(self.handler);
    }

    /// Returns the line number of the next character to be scanned
    /// (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column number of the next character to be scanned
    /// (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the character offset of the next character to be
    /// scanned.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }
}

impl<'h> Scanner<'h, FileSource> {
    /// Opens the file at `path` and returns a scanner over it.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`](crate::SourceError) if the
    /// file cannot be opened. Read failures after a successful open are
    /// reported as diagnostics, not errors.
    pub fn open(path: impl AsRef<Path>, handler: &'h Handler) -> SourceResult<Self> {
        Ok(Self::new(FileSource::open(path)?, handler))
    }
}

impl<'h, S: CharSource> Iterator for Scanner<'h, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}
