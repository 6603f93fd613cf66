//! String and character literal lexing.
//!
//! A backslash makes the next character literal, so `\"` does not close a
//! string and `\\` does not escape what follows it. Escapes are not decoded:
//! the token text is the raw content between the delimiters. Literals may
//! span lines.

use bmc_util::Address;

use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal whose opening `"` is at `address`.
    pub(crate) fn lex_string(&mut self, address: Address) -> LexResult<Token> {
        let text = self.scan_delimited(b'"', TokenKind::String, address)?;
        Ok(Token::new(TokenKind::String, text, address))
    }

    /// Lexes a character literal whose opening `'` is at `address`.
    ///
    /// The content must be one character or one backslash pair.
    pub(crate) fn lex_character(&mut self, address: Address) -> LexResult<Token> {
        let text = self.scan_delimited(b'\'', TokenKind::Character, address)?;
        match text.as_bytes() {
            [] => Err(LexError::EmptyCharacterLiteral { address }),
            [ch] if *ch != b'\\' => Ok(Token::new(TokenKind::Character, text, address)),
            [b'\\', _] => Ok(Token::new(TokenKind::Character, text, address)),
            _ => Err(LexError::InvalidCharacterLiteral { text, address }),
        }
    }

    /// Consumes literal content up to and including the first unescaped
    /// `delimiter`, returning the content without it.
    fn scan_delimited(
        &mut self,
        delimiter: u8,
        kind: TokenKind,
        address: Address,
    ) -> LexResult<String> {
        let limit = self.config.max_lexeme_len;
        let mut content = Vec::new();
        let mut escaped = false;
        let mut overflowed = false;

        loop {
            let Some(ch) = self.cursor.next_char() else {
                return Err(LexError::UnterminatedLiteral { kind, address });
            };
            if ch == delimiter && !escaped {
                break;
            }
            escaped = !escaped && ch == b'\\';

            if content.len() < limit {
                content.push(ch);
            } else {
                overflowed = true;
            }
        }

        if overflowed {
            return Err(LexError::LexemeTooLong {
                kind,
                limit,
                address,
            });
        }

        Ok(match String::from_utf8(content) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}
