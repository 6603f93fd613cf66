//! Source text with a precomputed line table.
//!
//! The scanner reads raw bytes, so [`SourceFile`] keeps the input exactly as
//! read and finds lines through their start offsets. Nothing is decoded until
//! a diagnostic asks for a line.

use crate::diagnostic::SourceSnippet;
use crate::Address;

/// Scanner input together with the byte offset of every line start.
///
/// # Examples
///
/// ```
/// use bmc_util::{Address, SourceFile};
///
/// let file = SourceFile::new("x = 1;\ny = @;");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some(&b"y = @;"[..]));
///
/// let snippet = file.snippet(Address::new(2, 5)).unwrap();
/// assert_eq!(snippet.line, "y = @;");
/// assert_eq!(snippet.start_column, 5);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile {
    content: Vec<u8>,
    /// Offsets just past each `\n`, plus 0 for the first line
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Wraps `content` and builds its line table.
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            content,
            line_starts,
        }
    }

    fn line_starts(content: &[u8]) -> Vec<usize> {
        let mut line_starts = vec![0];
        for (i, &byte) in content.iter().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts
    }

    /// The raw input.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Number of lines, counting the empty line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Bytes of a 1-based line, without its line terminator.
    pub fn line_at(&self, line: usize) -> Option<&[u8]> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self.line_starts.get(line).copied().unwrap_or(self.content.len());

        let mut text = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = text {
            text = rest;
        }
        Some(text)
    }

    /// Snippet of the line holding `address`, with the caret under it.
    ///
    /// Returns `None` when the address names a line the source does not have.
    pub fn snippet(&self, address: Address) -> Option<SourceSnippet> {
        let line = self.line_at(address.line as usize)?;
        Some(SourceSnippet::from_line_bytes(
            line,
            address.line as usize,
            address.column as usize,
        ))
    }
}
