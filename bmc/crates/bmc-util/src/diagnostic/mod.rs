//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use bmc_util::Address;
//! use bmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unterminated block comment")
//!     .code(DiagnosticCode::W_LEX_UNTERMINATED_COMMENT)
//!     .address(Address::new(4, 1))
//!     .emit(&handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Address;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use bmc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// An error: the scan produced no token for this input
    Error,
    /// A warning: scanning recovered and the input was still consumed
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Note => "36",
            Level::Help => "32",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub address: Address,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic as multi-line text.
    ///
    /// `origin` names the input (a file path or `<stdin>`); `color` wraps the
    /// level in ANSI escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmc_util::Address;
    /// use bmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    ///
    /// let diag = DiagnosticBuilder::error("unrecognized character '@'")
    ///     .code(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR)
    ///     .address(Address::new(2, 3))
    ///     .build();
    /// let text = diag.render("main.bm", false);
    /// assert!(text.starts_with("error[E0101]: unrecognized character '@'"));
    /// assert!(text.contains("--> main.bm:2:3"));
    /// ```
    pub fn render(&self, origin: &str, color: bool) -> String {
        let level = if color {
            format!("\x1b[1;{}m{}\x1b[0m", self.level.color_code(), self.level)
        } else {
            self.level.to_string()
        };

        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", level, code, self.message),
            None => format!("{}: {}\n", level, self.message),
        };
        out.push_str(&format!("  --> {}:{}\n", origin, self.address));

        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler is shared by reference; emitting goes through interior
/// mutability so a collector can be threaded through read-only call paths.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
