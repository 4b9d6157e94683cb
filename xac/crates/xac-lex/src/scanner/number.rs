//! Integer literal scanning.
//!
//! This module handles scanning of integer literals. Xa has no floats,
//! so a literal is a plain run of ASCII digits.

use xac_util::diagnostic::W_LITERAL_TOO_LONG;
use xac_util::{DiagnosticBuilder, Symbol};

use crate::source::CharSource;
use crate::token::{Token, MAX_LEXEME_LEN};
use crate::Scanner;

impl<'h, S: CharSource> Scanner<'h, S> {
    /// Scans an integer literal.
    ///
    /// At most 20 digits are kept. Letters trailing a literal are
    /// consumed and reported individually rather than starting an
    /// identifier, so `12a` is the literal `12` with one report.
    ///
    /// Digits beyond the bound are handled in one of two ways. By
    /// default they are left in the stream and start the next literal.
    /// With corrected literal bounds they are consumed and reported
    /// like the trailing letters.
    ///
    /// # Returns
    ///
    /// `Token::IntLit(symbol)` holding the kept digits.
    pub(crate) fn scan_number(&mut self) -> Token {
        self.buffer.clear();

        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_digit() || self.buffer.len() >= MAX_LEXEME_LEN {
                break;
            }
            self.buffer.push(c);
            self.cursor.advance();
        }

        if self.corrected_literal_bounds {
            while let Some(c) = self.cursor.current() {
                if !c.is_ascii_digit() {
                    break;
                }
                DiagnosticBuilder::warning("digit longer than 20 characters")
                    .code(W_LITERAL_TOO_LONG)
                    .span(self.current_char_span())
                    .emit(self.handler);
                self.cursor.advance();
            }
        }

        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            DiagnosticBuilder::warning("digit longer than 20 characters")
                .code(W_LITERAL_TOO_LONG)
                .span(self.current_char_span())
                .emit(self.handler);
            self.cursor.advance();
        }

        Token::IntLit(Symbol::intern(&self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use crate::source::StrSource;
    use crate::token::Token;
    use crate::Scanner;
    use xac_util::{Handler, Symbol};

    fn scan_first(source: &str, handler: &Handler) -> Token {
        let mut scanner = Scanner::new(StrSource::new(source), handler);
        scanner.next_token()
    }

    #[test]
    fn test_simple_literal() {
        let handler = Handler::new();
        let token = scan_first("42", &handler);
        assert_eq!(token, Token::IntLit(Symbol::intern("42")));
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_zero() {
        let handler = Handler::new();
        assert_eq!(scan_first("0", &handler), Token::IntLit(Symbol::intern("0")));
    }

    #[test]
    fn test_surrounding_whitespace_is_transparent() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("  42   "), &handler);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("42")));
        assert_eq!(scanner.next_token(), Token::Eof);
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_trailing_letters_are_consumed_and_reported() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("123abc"), &handler);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("123")));
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.warning_count(), 3);
    }

    #[test]
    fn test_single_trailing_letter_is_reported() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("12a"), &handler);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("12")));
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.warning_count(), 1);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].message, "digit longer than 20 characters");
    }

    #[test]
    fn test_excess_digits_split_into_second_literal() {
        let handler = Handler::new();
        let source = "1".repeat(25);
        let mut scanner = Scanner::new(StrSource::new(&source), &handler);
        assert_eq!(
            scanner.next_token(),
            Token::IntLit(Symbol::intern(&"1".repeat(20)))
        );
        assert_eq!(
            scanner.next_token(),
            Token::IntLit(Symbol::intern(&"1".repeat(5)))
        );
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_corrected_bounds_report_excess_digits() {
        let handler = Handler::new();
        let source = "1".repeat(25);
        let mut scanner = Scanner::new(StrSource::new(&source), &handler)
            .with_corrected_literal_bounds(true);
        assert_eq!(
            scanner.next_token(),
            Token::IntLit(Symbol::intern(&"1".repeat(20)))
        );
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.warning_count(), 5);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_corrected_bounds_leave_short_literals_alone() {
        let handler = Handler::new();
        let mut scanner =
            Scanner::new(StrSource::new("42"), &handler).with_corrected_literal_bounds(true);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("42")));
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_exact_bound_literal_has_no_warning() {
        let handler = Handler::new();
        let source = "9".repeat(20);
        let token = scan_first(&source, &handler);
        assert_eq!(token, Token::IntLit(Symbol::intern(&source)));
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_literal_then_operator() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("7+8"), &handler);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("7")));
        assert_eq!(scanner.next_token(), Token::Plus);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("8")));
    }
}
