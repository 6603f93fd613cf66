//! Whitespace and comment skipping.
//!
//! Line comments run from `//` to the end of the line. Block comments run
//! from `/*` to the first `*/`; they do not nest.

use bmc_util::Address;
use tracing::debug;

use super::core::is_whitespace;
use crate::error::{LexError, LexResult};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments in any interleaving.
    ///
    /// Repeats until a full pass consumes nothing. An unterminated block
    /// comment is skipped to end of input and then reported.
    pub(crate) fn skip_trivia(&mut self) -> LexResult<()> {
        loop {
            let start = self.cursor.position();
            self.skip_whitespace();
            self.skip_comment()?;
            if self.cursor.position() == start {
                return Ok(());
            }
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            let ch = self.cursor.next_char();
            if !matches!(ch, Some(c) if is_whitespace(c)) {
                self.cursor.pushback(ch);
                return;
            }
        }
    }

    /// Skips one comment, if the cursor is at one.
    ///
    /// A `/` that does not open a comment is left unconsumed along with the
    /// character after it.
    fn skip_comment(&mut self) -> LexResult<()> {
        let first = self.cursor.next_char();
        if first != Some(b'/') {
            self.cursor.pushback(first);
            return Ok(());
        }
        let address = self.cursor.address();

        let second = self.cursor.next_char();
        match second {
            Some(b'/') => {
                self.skip_line_comment();
                Ok(())
            },
            Some(b'*') => self.skip_block_comment(address),
            _ => {
                self.cursor.pushback(second);
                self.cursor.pushback(first);
                Ok(())
            },
        }
    }

    /// Skips through the end of the line, newline included.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.cursor.next_char() {
            if ch == b'\n' {
                break;
            }
        }
    }

    /// Skips the body of a block comment whose `/*` starts at `address`.
    fn skip_block_comment(&mut self, address: Address) -> LexResult<()> {
        let mut prev = None;
        loop {
            let Some(ch) = self.cursor.next_char() else {
                debug!(line = address.line, column = address.column, "unterminated block comment");
                return Err(LexError::UnterminatedComment { address });
            };
            if ch == b'/' && prev == Some(b'*') {
                debug!(
                    from = %address,
                    to = %self.cursor.address(),
                    "skipped block comment"
                );
                return Ok(());
            }
            prev = Some(ch);
        }
    }
}
