//! Character cursor with line/column tracking and bounded pushback.
//!
//! The [`Cursor`] hands out one byte at a time and can undo the most recent
//! reads. Input is treated as a single-byte encoding: every byte is one
//! character for position purposes.
//!
//! Reading `\n` moves to the next line and resets the column to 0. Undoing a
//! read restores the exact address held before that read, so undoing a
//! newline returns to the column the previous line ended at. Up to
//! [`PUSHBACK_CAPACITY`] reads can be undone in a row, in reverse order.

use bmc_util::Address;

/// How many consecutive reads can be pushed back.
///
/// Two covers every lookahead in the grammar: the comment skipper reads `/`
/// and one more character before deciding it is not looking at a comment.
pub const PUSHBACK_CAPACITY: usize = 2;

/// A cursor over source bytes.
///
/// # Example
///
/// ```
/// use bmc_lex::cursor::Cursor;
/// use bmc_util::Address;
///
/// let mut cursor = Cursor::new(b"a\nb");
/// assert_eq!(cursor.next_char(), Some(b'a'));
/// assert_eq!(cursor.next_char(), Some(b'\n'));
/// assert_eq!(cursor.address(), Address::new(2, 0));
///
/// cursor.pushback(Some(b'\n'));
/// assert_eq!(cursor.address(), Address::new(1, 1));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a [u8],

    /// Byte offset of the next character to read.
    position: usize,

    /// Address after the most recent read.
    address: Address,

    /// Addresses held before each of the most recent reads, newest last.
    history: [Address; PUSHBACK_CAPACITY],

    /// Number of valid entries in `history`.
    history_len: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            address: Address::START,
            history: [Address::START; PUSHBACK_CAPACITY],
            history_len: 0,
        }
    }

    /// Reads the next character, or `None` at end of input.
    ///
    /// Reading at end of input does not move the cursor.
    pub fn next_char(&mut self) -> Option<u8> {
        let byte = *self.source.get(self.position)?;

        self.remember(self.address);
        self.position += 1;
        if byte == b'\n' {
            self.address.line += 1;
            self.address.column = 0;
        } else {
            self.address.column += 1;
        }

        Some(byte)
    }

    /// Undoes the most recent read of `ch`.
    ///
    /// `None` stands for end of input and is a no-op, so callers can push back
    /// whatever [`Cursor::next_char`] returned without checking it.
    pub fn pushback(&mut self, ch: Option<u8>) {
        let Some(byte) = ch else {
            return;
        };

        debug_assert!(
            self.history_len > 0,
            "pushback of {:?} exceeds the pushback capacity of {}",
            char::from(byte),
            PUSHBACK_CAPACITY
        );
        if self.history_len == 0 {
            return;
        }
        debug_assert_eq!(
            self.source.get(self.position - 1),
            Some(&byte),
            "pushback of a character that was not the last one read"
        );

        self.history_len -= 1;
        self.address = self.history[self.history_len];
        self.position -= 1;
    }

    fn remember(&mut self, address: Address) {
        if self.history_len == PUSHBACK_CAPACITY {
            self.history.copy_within(1.., 0);
            self.history_len -= 1;
        }
        self.history[self.history_len] = address;
        self.history_len += 1;
    }

    /// Address after the most recent read.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Byte offset of the next character to read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if every character has been read.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The full source.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}
