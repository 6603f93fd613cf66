//! Integer literal lexing.
//!
//! Integers are runs of decimal digits kept as text. There is no sign, no
//! base prefix, and no range check; a leading `-` is a separate operator.

use bmc_util::Address;

use crate::error::LexResult;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal starting with the consumed digit `first`.
    pub(crate) fn lex_integer(&mut self, first: u8, address: Address) -> LexResult<Token> {
        let text = self.scan_run(first, TokenKind::Integer, address, |c| c.is_ascii_digit())?;
        Ok(Token::new(TokenKind::Integer, text, address))
    }
}

#[cfg(test)]
mod tests {
    use bmc_util::Address;

    use crate::error::LexError;
    use crate::lexer::LexerConfig;
    use crate::{tokenize, Lexer, Token, TokenKind};

    #[test]
    fn test_integer() {
        let tokens = tokenize("123").unwrap();
        assert_eq!(tokens, vec![Token::new(TokenKind::Integer, "123", Address::new(1, 1))]);
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        let tokens = tokenize("007").unwrap();
        assert_eq!(tokens[0].text(), "007");
    }

    #[test]
    fn test_no_overflow_check() {
        let huge = "99999999999999999999999999999999";
        let tokens = tokenize(huge).unwrap();
        assert_eq!(tokens[0].text(), huge);
    }

    #[test]
    fn test_no_fraction_or_prefix() {
        let items: Vec<_> = Lexer::new("1.5").collect();
        assert_eq!(items[0].as_ref().map(Token::text), Ok("1"));
        assert!(matches!(items[1], Err(LexError::UnrecognizedCharacter { byte: b'.', .. })));
        assert_eq!(items[2].as_ref().map(Token::text), Ok("5"));

        let tokens = tokenize("0x1F").unwrap();
        let texts: Vec<_> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, ["0", "x1F"]);
    }

    #[test]
    fn test_integer_too_long_resynchronises() {
        let config = LexerConfig::default().with_max_lexeme_len(3);
        let items: Vec<_> = Lexer::with_config("12345;", config).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            Err(LexError::LexemeTooLong {
                kind: TokenKind::Integer,
                limit: 3,
                address: Address::new(1, 1)
            })
        );
        assert_eq!(items[1].as_ref().map(Token::text), Ok(";"));
    }
}
