//! Identifier and keyword scanning.
//!
//! This module handles scanning of identifiers and keywords.

use xac_util::diagnostic::W_NAME_TOO_LONG;
use xac_util::{DiagnosticBuilder, Symbol};

use crate::source::CharSource;
use crate::token::{keyword_from_ident, Token, MAX_LEXEME_LEN};
use crate::Scanner;

impl<'h, S: CharSource> Scanner<'h, S> {
    /// Scans an identifier or keyword.
    ///
    /// Identifiers are runs of ASCII letters; digits never continue an
    /// identifier. Only the first 20 characters are kept. Every letter
    /// beyond the bound is consumed and reported individually, so the
    /// whole run is gone from the stream either way. After reading the
    /// identifier, checks if it matches a reserved keyword.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `Token::Repeat`) or
    /// `Token::Ident(symbol)`.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        self.buffer.clear();

        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_alphabetic() || self.buffer.len() >= MAX_LEXEME_LEN {
                break;
            }
            self.buffer.push(c);
            self.cursor.advance();
        }

        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            DiagnosticBuilder::warning("variable name longer than 20 characters")
                .code(W_NAME_TOO_LONG)
                .span(self.current_char_span())
                .emit(self.handler);
            self.cursor.advance();
        }

        keyword_from_ident(&self.buffer)
            .unwrap_or_else(|| Token::Ident(Symbol::intern(&self.buffer)))
    }
}
