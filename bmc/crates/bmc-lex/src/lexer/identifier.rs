//! Identifier and keyword lexing.

use bmc_util::Address;

use super::core::is_identifier_continue;
use crate::error::LexResult;
use crate::keyword;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword starting with the consumed `first`.
    ///
    /// Consumes the maximal run of `[A-Za-z0-9_]`, then classifies it against
    /// the keyword table.
    pub(crate) fn lex_identifier(&mut self, first: u8, address: Address) -> LexResult<Token> {
        let text = self.scan_run(first, TokenKind::Identifier, address, is_identifier_continue)?;
        Ok(Token::new(keyword::classify(&text), text, address))
    }
}
