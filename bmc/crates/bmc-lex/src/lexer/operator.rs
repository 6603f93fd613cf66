//! Operator and punctuation lexing.
//!
//! Every operator is one or two characters long. Two-character operators are
//! resolved with a single lookahead: `+ - & |` double with themselves and
//! `< > ! =` pair with a trailing `=`.

use bmc_util::Address;

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Characters that always form a one-character operator.
pub const SINGLE_OPERATORS: &[u8] = b"()[]{};:,*/%^";

/// Returns true if `ch` starts an operator.
pub fn is_operator_start(ch: u8) -> bool {
    SINGLE_OPERATORS.contains(&ch) || second_char(ch).is_some()
}

/// The character that extends `first` into a two-character operator.
fn second_char(first: u8) -> Option<u8> {
    match first {
        b'+' | b'-' | b'&' | b'|' => Some(first),
        b'<' | b'>' | b'!' | b'=' => Some(b'='),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an operator whose first character `first` has been consumed.
    ///
    /// Handles: `( ) [ ] { } ; : , * / % ^`, `+ ++ - -- & && | ||`,
    /// `< <= > >= ! != = ==`
    pub(crate) fn lex_operator(&mut self, first: u8, address: Address) -> Token {
        let mut text = String::with_capacity(2);
        text.push(char::from(first));

        if let Some(expected) = second_char(first) {
            let next = self.cursor.next_char();
            if next == Some(expected) {
                text.push(char::from(expected));
            } else {
                self.cursor.pushback(next);
            }
        }

        Token::new(TokenKind::Operator, text, address)
    }
}
