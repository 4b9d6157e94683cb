//! Operator and punctuation scanning.
//!
//! This module handles the operators that need one character of
//! lookahead to disambiguate. When the second character does not
//! complete a digraph it stays buffered as the start of the next token.

use crate::source::CharSource;
use crate::token::Token;
use crate::Scanner;

impl<'h, S: CharSource> Scanner<'h, S> {
    /// Scans equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn scan_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::EqEq
        } else {
            Token::Eq
        }
    }

    /// Scans not-equals.
    ///
    /// Handles: `!=`. A bare `!` is not a token in Xa; it is reported
    /// and becomes `Token::Invalid`.
    pub(crate) fn scan_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::NotEq
        } else {
            self.report_unexpected_char('!');
            Token::Invalid
        }
    }

    /// Scans logical and.
    ///
    /// Handles: `&&`. A bare `&` is reported and becomes
    /// `Token::Invalid`.
    pub(crate) fn scan_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            Token::AndAnd
        } else {
            self.report_unexpected_char('&');
            Token::Invalid
        }
    }

    /// Scans logical or.
    ///
    /// Handles: `||`. A bare `|` is reported and becomes
    /// `Token::Invalid`.
    pub(crate) fn scan_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            Token::OrOr
        } else {
            self.report_unexpected_char('|');
            Token::Invalid
        }
    }

    /// Scans less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn scan_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::LtEq
        } else {
            Token::Lt
        }
    }

    /// Scans greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn scan_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::GtEq
        } else {
            Token::Gt
        }
    }
}
