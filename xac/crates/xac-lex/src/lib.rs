//! xac-lex - Lexical Analyzer for the Xa Programming Language
//!
//! This crate provides the scanner (tokenizer) for the Xa programming
//! language. It transforms source code into a stream of tokens that can
//! be consumed by the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The scanner
//! reads characters one at a time through a [`CharSource`] and keeps a
//! single character of lookahead, so programs are tokenized in one
//! forward pass without ever holding the whole source in memory.
//!
//! Scanning never fails once a source is open. Malformed input becomes
//! [`Token::Invalid`] and over-long lexemes are truncated; both are
//! reported through a diagnostic [`Handler`](xac_util::Handler) and the
//! scan continues.
//!
//! # Example Usage
//!
//! ```
//! use xac_util::Handler;
//! use xac_lex::{Scanner, StrSource, Token};
//!
//! let source = "x = 42;";
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(StrSource::new(source), &handler);
//!
//! // Iterate through tokens
//! for token in &mut scanner {
//!     println!("{:?}", token);
//! }
//!
//! // Or get tokens one at a time
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(StrSource::new(source), &handler);
//! assert_eq!(scanner.next_token(), Token::Ident(xac_util::Symbol::intern("x")));
//! assert_eq!(scanner.next_token(), Token::Eq);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - Main scanner implementation
//! - [`cursor`] - Lookahead cursor over a character source
//! - [`source`] - Character sources (string and file backed)
//! - [`error`] - Source open errors
//!
//! # Token Categories
//!
//! The scanner produces the following token types:
//!
//! ## Keywords
//!
//! Reserved words with special meaning (5 total, all upper case):
//! `IF`, `ELSEIF`, `ELSE`, `REPEAT`, `OUTPUT`
//!
//! ## Identifiers
//!
//! Names for variables. Pattern: `[a-zA-Z]+`, at most 20 characters
//! kept.
//!
//! ## Literals
//!
//! Integer literals only: `42`, `007`. At most 20 digits kept.
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `;`
//!
//! ## Special
//!
//! - **EOF**: End of input marker, returned indefinitely once reached
//! - **Invalid**: Unrecognized characters, consumed and reported

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{SourceError, SourceResult};
pub use scanner::Scanner;
pub use source::{CharSource, FileSource, StrSource};
pub use token::{keyword_from_ident, Token, MAX_LEXEME_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use xac_util::{Handler, Symbol};

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new(source), &handler);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token == Token::Eof {
                break;
            }
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn test_counter_program() {
        let source = r#"
            count = 0;
            REPEAT {
                count = count + 1;
                IF count >= 10 {
                    OUTPUT count;
                }
            }
        "#;
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::Repeat));
        assert!(tokens.contains(&Token::If));
        assert!(tokens.contains(&Token::Output));
        assert!(tokens.contains(&Token::GtEq));
        assert!(tokens.contains(&Token::Ident(Symbol::intern("count"))));
        assert!(tokens.contains(&Token::IntLit(Symbol::intern("10"))));
    }

    #[test]
    fn test_branching_program() {
        let source = r#"
            IF x == 1 {
                OUTPUT one;
            } ELSEIF x == 2 && y != 0 {
                OUTPUT two;
            } ELSE {
                OUTPUT rest;
            }
        "#;
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::If));
        assert!(tokens.contains(&Token::ElseIf));
        assert!(tokens.contains(&Token::Else));
        assert!(tokens.contains(&Token::EqEq));
        assert!(tokens.contains(&Token::AndAnd));
        assert!(tokens.contains(&Token::NotEq));
        assert!(tokens.contains(&Token::LBrace));
        assert!(tokens.contains(&Token::RBrace));
    }

    #[test]
    fn test_arithmetic_statement() {
        let tokens = lex_all("rem = a % (b - 2) * c / d;");

        assert_eq!(
            tokens,
            vec![
                Token::Ident(Symbol::intern("rem")),
                Token::Eq,
                Token::Ident(Symbol::intern("a")),
                Token::Percent,
                Token::LParen,
                Token::Ident(Symbol::intern("b")),
                Token::Minus,
                Token::IntLit(Symbol::intern("2")),
                Token::RParen,
                Token::Star,
                Token::Ident(Symbol::intern("c")),
                Token::Slash,
                Token::Ident(Symbol::intern("d")),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_error_recovery_continues() {
        let source = "x = ? 42;";
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new(source), &handler);

        assert_eq!(scanner.next_token(), Token::Ident(Symbol::intern("x")));
        assert_eq!(scanner.next_token(), Token::Eq);

        // Invalid character produces an error but the scan continues
        assert_eq!(scanner.next_token(), Token::Invalid);
        assert_eq!(scanner.next_token(), Token::IntLit(Symbol::intern("42")));
        assert_eq!(scanner.next_token(), Token::Semicolon);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_line_column_tracking() {
        let source = "x\ny\n=\n42";
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new(source), &handler);

        let _ = scanner.next_token();
        let span = scanner.token_span();
        assert_eq!((span.line, span.column), (1, 1));

        let _ = scanner.next_token();
        let span = scanner.token_span();
        assert_eq!((span.line, span.column), (2, 1));

        let _ = scanner.next_token();
        let span = scanner.token_span();
        assert_eq!((span.line, span.column), (3, 1));

        let _ = scanner.next_token();
        let span = scanner.token_span();
        assert_eq!((span.line, span.column), (4, 1));
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("   \n\t  \n  ").is_empty());
    }

    #[test]
    fn test_keywords_inside_identifiers_are_not_keywords() {
        let tokens = lex_all("IFIF OUTPUTS xIF");
        assert_eq!(
            tokens,
            vec![
                Token::Ident(Symbol::intern("IFIF")),
                Token::Ident(Symbol::intern("OUTPUTS")),
                Token::Ident(Symbol::intern("xIF")),
            ]
        );
    }
}
