//! Edge case tests for xac-lex

#[cfg(test)]
mod tests {
    use crate::{Scanner, StrSource, Token};
    use xac_util::{Handler, Symbol};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new(source), &handler);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token == Token::Eof { break; }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("   \n\t  \n  ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0], Token::Ident(Symbol::intern("x")));
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        let t = lex_all("IF ELSE REPEAT");
        assert_eq!(t[0], Token::If);
        assert_eq!(t[1], Token::Else);
        assert_eq!(t[2], Token::Repeat);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("If IF");
        assert_eq!(t[0], Token::Ident(Symbol::intern("If")));
        assert_eq!(t[1], Token::If);
    }

    #[test]
    fn test_edge_all_operators() {
        let t = lex_all("+ - * / % = == != < > <= >= && ||");
        assert!(t.contains(&Token::Plus));
        assert!(t.contains(&Token::Percent));
        assert!(t.contains(&Token::Eq));
        assert!(t.contains(&Token::EqEq));
        assert!(t.contains(&Token::NotEq));
        assert!(t.contains(&Token::GtEq));
        assert!(t.contains(&Token::AndAnd));
        assert!(t.contains(&Token::OrOr));
    }

    #[test]
    fn test_edge_all_delimiters() {
        let t = lex_all("( ) { } ;");
        assert_eq!(
            t,
            vec![
                Token::LParen,
                Token::RParen,
                Token::LBrace,
                Token::RBrace,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| **x == Token::LParen).count(), 3);
        assert_eq!(t.iter().filter(|x| **x == Token::RParen).count(), 3);
    }

    #[test]
    fn test_edge_consec_ops() {
        let t = lex_all("+++");
        assert_eq!(t, vec![Token::Plus, Token::Plus, Token::Plus]);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("x\t=\n1");
        assert_eq!(t[0], Token::Ident(Symbol::intern("x")));
        assert_eq!(t[1], Token::Eq);
        assert_eq!(t[2], Token::IntLit(Symbol::intern("1")));
    }

    #[test]
    fn test_edge_no_spaces_needed() {
        let t = lex_all("x=1;");
        assert_eq!(t.len(), 4);
        assert_eq!(t[1], Token::Eq);
        assert_eq!(t[3], Token::Semicolon);
    }

    #[test]
    fn test_edge_leading_zeros() {
        let t = lex_all("007");
        assert_eq!(t[0], Token::IntLit(Symbol::intern("007")));
    }

    #[test]
    fn test_edge_max_lexeme_ident() {
        let name = "z".repeat(20);
        let t = lex_all(&name);
        assert_eq!(t[0], Token::Ident(Symbol::intern(&name)));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_stray_at_sign() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("@"), &handler);
        assert_eq!(scanner.next_token(), Token::Invalid);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert!(handler.has_errors());
    }

    #[test]
    fn test_err_invalid_chars_all_consumed() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("@#$?"), &handler);
        let mut invalid = 0;
        while scanner.next_token() != Token::Eof {
            invalid += 1;
        }
        assert_eq!(invalid, 4);
        assert_eq!(handler.error_count(), 4);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("x = # 1;"), &handler);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token == Token::Eof { break; }
            tokens.push(token);
        }
        assert!(handler.has_errors());
        assert_eq!(
            tokens,
            vec![
                Token::Ident(Symbol::intern("x")),
                Token::Eq,
                Token::Invalid,
                Token::IntLit(Symbol::intern("1")),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_err_eof_stays_eof_after_errors() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(StrSource::new("@"), &handler);
        assert_eq!(scanner.next_token(), Token::Invalid);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(scanner.next_token(), Token::Eof);
        assert_eq!(scanner.next_token(), Token::Eof);
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use crate::{Scanner, StrSource, Token};
    use xac_util::Handler;

    proptest! {
        /// Scanning any printable ASCII input terminates, and never
        /// produces more tokens than there are characters.
        #[test]
        fn scan_terminates_on_printable_ascii(input in "[ -~]{0,64}") {
            let handler = Handler::new();
            let mut scanner = Scanner::new(StrSource::new(&input), &handler);
            let mut tokens = 0usize;
            while scanner.next_token() != Token::Eof {
                tokens += 1;
                prop_assert!(tokens <= input.len());
            }
        }

        /// A short run of letters scans to a single token whose text
        /// round-trips, unless it happens to be a keyword.
        #[test]
        fn single_identifier_roundtrip(input in "[A-Za-z]{1,20}") {
            let handler = Handler::new();
            let mut scanner = Scanner::new(StrSource::new(&input), &handler);
            match scanner.next_token() {
                Token::Ident(symbol) => prop_assert_eq!(symbol.as_str(), input.as_str()),
                token => prop_assert!(token.is_keyword(), "unexpected token {:?}", token),
            }
            prop_assert_eq!(scanner.next_token(), Token::Eof);
            prop_assert_eq!(handler.warning_count(), 0);
        }

        /// A run of letters past the bound keeps the first 20 and
        /// reports each excess character.
        #[test]
        fn long_identifier_truncates(input in "[A-Za-z]{21,40}") {
            let handler = Handler::new();
            let mut scanner = Scanner::new(StrSource::new(&input), &handler);
            match scanner.next_token() {
                Token::Ident(symbol) => prop_assert_eq!(symbol.as_str(), &input[..20]),
                token => prop_assert!(false, "expected identifier, got {:?}", token),
            }
            prop_assert_eq!(scanner.next_token(), Token::Eof);
            prop_assert_eq!(handler.warning_count(), input.len() - 20);
        }

        /// Digit runs up to the bound scan to a single literal with the
        /// same text.
        #[test]
        fn literal_roundtrip(input in "[0-9]{1,20}") {
            let handler = Handler::new();
            let mut scanner = Scanner::new(StrSource::new(&input), &handler);
            match scanner.next_token() {
                Token::IntLit(symbol) => prop_assert_eq!(symbol.as_str(), input.as_str()),
                token => prop_assert!(false, "expected literal, got {:?}", token),
            }
            prop_assert_eq!(scanner.next_token(), Token::Eof);
        }
    }
}
