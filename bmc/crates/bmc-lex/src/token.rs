//! Token type definitions.
//!
//! A [`Token`] is the classified lexeme together with the address of its
//! first character. Tokens are created once by a scanner and never mutated.

use std::fmt;

use bmc_util::Address;

/// The closed set of token classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the reserved words in [`crate::keyword::KEYWORDS`]
    Keyword,
    /// A name: `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
    Identifier,
    /// An operator or punctuation mark, one or two characters long
    Operator,
    /// A run of decimal digits, kept as text
    Integer,
    /// A single-quoted character literal
    Character,
    /// A double-quoted string literal
    String,
}

impl TokenKind {
    /// Lower-case name used in token dumps and messages.
    pub const fn description(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Integer => "integer",
            TokenKind::Character => "character",
            TokenKind::String => "string",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A scanned token.
///
/// `text` is the exact lexeme: operators keep their spelling (`">="`), string
/// and character literals keep their raw content without the delimiters and
/// without escape decoding.
///
/// # Example
///
/// ```
/// use bmc_lex::{Token, TokenKind};
/// use bmc_util::Address;
///
/// let token = Token::new(TokenKind::Keyword, "while", Address::new(1, 5));
/// assert_eq!(
///     token.to_string(),
///     "Token: (type: keyword, value: while, line: 1, col: 5)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    address: Address,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, address: Address) -> Self {
        Self {
            kind,
            text: text.into(),
            address,
        }
    }

    /// The token class.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Address of the token's first character.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Line of the token's first character.
    pub fn line(&self) -> u32 {
        self.address.line
    }

    /// Column of the token's first character.
    pub fn column(&self) -> u32 {
        self.address.column
    }

    /// Consumes the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: (type: {}, value: {}, line: {}, col: {})",
            self.kind, self.text, self.address.line, self.address.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_descriptions() {
        assert_eq!(TokenKind::Keyword.description(), "keyword");
        assert_eq!(TokenKind::Identifier.description(), "identifier");
        assert_eq!(TokenKind::Operator.description(), "operator");
        assert_eq!(TokenKind::Integer.description(), "integer");
        assert_eq!(TokenKind::Character.description(), "character");
        assert_eq!(TokenKind::String.to_string(), "string");
    }

    #[test]
    fn test_accessors() {
        let token = Token::new(TokenKind::Operator, ">=", Address::new(3, 9));
        assert_eq!(token.kind(), TokenKind::Operator);
        assert_eq!(token.text(), ">=");
        assert_eq!(token.line(), 3);
        assert_eq!(token.column(), 9);
        assert_eq!(token.address(), Address::new(3, 9));
        assert_eq!(token.into_text(), ">=");
    }

    #[test]
    fn test_display_matches_dump_format() {
        let token = Token::new(TokenKind::Integer, "42", Address::new(1, 5));
        assert_eq!(
            token.to_string(),
            "Token: (type: integer, value: 42, line: 1, col: 5)"
        );
    }
}
