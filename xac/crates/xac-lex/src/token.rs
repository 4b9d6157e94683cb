//! Token type definitions.
//!
//! This module defines the `Token` enum produced by the scanner, the
//! keyword lookup used to separate keywords from identifiers, and the
//! lexeme length bound shared by identifiers and integer literals.

use std::fmt;

use xac_util::Symbol;

/// Maximum number of characters retained for an identifier or integer
/// literal lexeme. Characters beyond this bound are consumed but not
/// stored.
pub const MAX_LEXEME_LEN: usize = 20;

/// A lexical token of the Xa language.
///
/// Tokens are cheap to copy. Identifier and integer literal tokens carry
/// their text as an interned [`Symbol`]; every other kind is fully
/// described by its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An identifier, e.g. `counter`.
    Ident(Symbol),
    /// An integer literal, e.g. `42`.
    IntLit(Symbol),

    /// `IF`
    If,
    /// `ELSEIF`
    ElseIf,
    /// `ELSE`
    Else,
    /// `REPEAT`
    Repeat,
    /// `OUTPUT`
    Output,

    /// `=` (assignment)
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,

    /// End of input marker.
    Eof,
    /// An unrecognized character. The offending character is consumed
    /// and reported through the diagnostic handler.
    Invalid,
}

/// Returns the keyword token for the given identifier text, if any.
///
/// Keyword matching is case sensitive: `IF` is a keyword, `if` is an
/// ordinary identifier.
///
/// # Example
///
/// ```
/// use xac_lex::{keyword_from_ident, Token};
///
/// assert_eq!(keyword_from_ident("REPEAT"), Some(Token::Repeat));
/// assert_eq!(keyword_from_ident("repeat"), None);
/// assert_eq!(keyword_from_ident("IFX"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    match ident {
        "IF" => Some(Token::If),
        "ELSEIF" => Some(Token::ElseIf),
        "ELSE" => Some(Token::Else),
        "REPEAT" => Some(Token::Repeat),
        "OUTPUT" => Some(Token::Output),
        _ => None,
    }
}

impl Token {
    /// Returns a stable upper-case name for the token kind.
    ///
    /// The name does not include the lexeme text; use [`Token::text`]
    /// for that.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Ident(_) => "IDENT",
            Token::IntLit(_) => "INT_LIT",
            Token::If => "IF",
            Token::ElseIf => "ELSEIF",
            Token::Else => "ELSE",
            Token::Repeat => "REPEAT",
            Token::Output => "OUTPUT",
            Token::Eq => "EQ",
            Token::EqEq => "EQEQ",
            Token::NotEq => "NOTEQ",
            Token::AndAnd => "ANDAND",
            Token::OrOr => "OROR",
            Token::Lt => "LT",
            Token::LtEq => "LTEQ",
            Token::Gt => "GT",
            Token::GtEq => "GTEQ",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Star => "STAR",
            Token::Slash => "SLASH",
            Token::Percent => "PERCENT",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::LBrace => "LBRACE",
            Token::RBrace => "RBRACE",
            Token::Semicolon => "SEMICOLON",
            Token::Eof => "EOF",
            Token::Invalid => "INVALID",
        }
    }

    /// Returns the lexeme text carried by this token.
    ///
    /// Only identifiers and integer literals carry text; all other
    /// kinds return `None`.
    pub fn text(&self) -> Option<Symbol> {
        match self {
            Token::Ident(symbol) | Token::IntLit(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Returns true if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::If | Token::ElseIf | Token::Else | Token::Repeat | Token::Output
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(symbol) | Token::IntLit(symbol) => write!(f, "{}", symbol),
            Token::If => write!(f, "IF"),
            Token::ElseIf => write!(f, "ELSEIF"),
            Token::Else => write!(f, "ELSE"),
            Token::Repeat => write!(f, "REPEAT"),
            Token::Output => write!(f, "OUTPUT"),
            Token::Eq => write!(f, "="),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::Lt => write!(f, "<"),
            Token::LtEq => write!(f, "<="),
            Token::Gt => write!(f, ">"),
            Token::GtEq => write!(f, ">="),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Semicolon => write!(f, ";"),
            Token::Eof => write!(f, "<eof>"),
            Token::Invalid => write!(f, "<invalid>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_from_ident("IF"), Some(Token::If));
        assert_eq!(keyword_from_ident("ELSEIF"), Some(Token::ElseIf));
        assert_eq!(keyword_from_ident("ELSE"), Some(Token::Else));
        assert_eq!(keyword_from_ident("REPEAT"), Some(Token::Repeat));
        assert_eq!(keyword_from_ident("OUTPUT"), Some(Token::Output));
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("if"), None);
        assert_eq!(keyword_from_ident("If"), None);
        assert_eq!(keyword_from_ident("elseif"), None);
        assert_eq!(keyword_from_ident("Output"), None);
    }

    #[test]
    fn test_keyword_lookup_rejects_prefixes() {
        assert_eq!(keyword_from_ident("IFX"), None);
        assert_eq!(keyword_from_ident("ELSEI"), None);
        assert_eq!(keyword_from_ident("REPEATS"), None);
    }

    #[test]
    fn test_text_only_on_literals() {
        let ident = Token::Ident(Symbol::intern("foo"));
        let lit = Token::IntLit(Symbol::intern("42"));
        assert_eq!(ident.text().map(|s| s.as_str()), Some("foo"));
        assert_eq!(lit.text().map(|s| s.as_str()), Some("42"));
        assert_eq!(Token::If.text(), None);
        assert_eq!(Token::EqEq.text(), None);
        assert_eq!(Token::Eof.text(), None);
    }

    #[test]
    fn test_is_keyword() {
        assert!(Token::If.is_keyword());
        assert!(Token::ElseIf.is_keyword());
        assert!(Token::Output.is_keyword());
        assert!(!Token::Ident(Symbol::intern("IFX")).is_keyword());
        assert!(!Token::Eq.is_keyword());
        assert!(!Token::Eof.is_keyword());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Token::Ident(Symbol::intern("x")).kind_name(), "IDENT");
        assert_eq!(Token::IntLit(Symbol::intern("1")).kind_name(), "INT_LIT");
        assert_eq!(Token::ElseIf.kind_name(), "ELSEIF");
        assert_eq!(Token::EqEq.kind_name(), "EQEQ");
        assert_eq!(Token::Semicolon.kind_name(), "SEMICOLON");
        assert_eq!(Token::Invalid.kind_name(), "INVALID");
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Ident(Symbol::intern("count")).to_string(), "count");
        assert_eq!(Token::IntLit(Symbol::intern("42")).to_string(), "42");
        assert_eq!(Token::Repeat.to_string(), "REPEAT");
        assert_eq!(Token::NotEq.to_string(), "!=");
        assert_eq!(Token::LBrace.to_string(), "{");
        assert_eq!(Token::RBrace.to_string(), "}");
        assert_eq!(Token::Eof.to_string(), "<eof>");
    }

    #[test]
    fn test_tokens_are_copy() {
        let token = Token::Ident(Symbol::intern("copied"));
        let copy = token;
        assert_eq!(token, copy);
    }
}
