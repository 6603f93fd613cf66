//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! Codes follow the format `{prefix}{number}` where the prefix is `E` for
//! errors and `W` for warnings, and the number is zero-padded to four digits.
//! Lexical diagnostics live in the `01xx` range.
//!
//! # Examples
//!
//! ```
//! use bmc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 101);
//! assert_eq!(code.as_str(), "E0101");
//! ```

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use bmc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101", "W0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E0101: a character that starts no token
    pub const E_LEX_UNRECOGNIZED_CHAR: Self = Self::new("E", 101);
    /// E0102: string or character literal without its closing delimiter
    pub const E_LEX_UNTERMINATED_LITERAL: Self = Self::new("E", 102);
    /// E0103: lexeme longer than the configured bound
    pub const E_LEX_LEXEME_TOO_LONG: Self = Self::new("E", 103);
    /// E0104: `''`
    pub const E_LEX_EMPTY_CHAR_LITERAL: Self = Self::new("E", 104);
    /// E0105: character literal holding more than one character
    pub const E_LEX_INVALID_CHAR_LITERAL: Self = Self::new("E", 105);

    /// W0101: block comment running to end of input
    pub const W_LEX_UNTERMINATED_COMMENT: Self = Self::new("W", 101);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
