//! Address module - Source position tracking.
//!
//! An [`Address`] is a line/column pair. Lines are 1-based. Columns count
//! characters consumed on the current line, so the column of a character is
//! its 1-based position within the line once it has been read, and column 0
//! means "at the start of the line, nothing read yet".
//!
//! # Examples
//!
//! ```
//! use bmc_util::Address;
//!
//! let start = Address::START;
//! assert_eq!(start.line, 1);
//! assert_eq!(start.column, 0);
//!
//! let addr = Address::new(3, 7);
//! assert_eq!(addr.to_string(), "3:7");
//! ```

use std::fmt;

/// A position in the source text.
///
/// Addresses are plain values: a token copies the address of its first
/// character when it is created and never shares it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0 before the first character of a line)
    pub column: u32,
}

impl Address {
    /// The position of a scan that has not consumed anything yet.
    pub const START: Address = Address { line: 1, column: 0 };

    /// Create a new address
    ///
    /// # Examples
    ///
    /// ```
    /// use bmc_util::Address;
    ///
    /// let addr = Address::new(2, 4);
    /// assert_eq!(addr.line, 2);
    /// assert_eq!(addr.column, 4);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Address {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
