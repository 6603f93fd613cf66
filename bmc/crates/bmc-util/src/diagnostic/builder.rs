//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Address;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use bmc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = @;", 1, 5, 6, Some("here"));
/// assert!(snippet.format().contains('^'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Build a snippet from one raw source line.
    ///
    /// `column` counts bytes, as the scanner does. The line is decoded lossily
    /// and the caret goes under the character holding that byte. Column 0
    /// (nothing read on the line yet) is shown under the first column.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmc_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::from_line_bytes("a é @".as_bytes(), 1, 6);
    /// assert_eq!(snippet.line, "a é @");
    /// assert_eq!(snippet.start_column, 5);
    /// ```
    pub fn from_line_bytes(line: &[u8], line_number: usize, column: usize) -> Self {
        let caret = char_column(line, column.saturating_sub(1));
        Self::point(String::from_utf8_lossy(line), line_number, caret)
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line pointing at the range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// 1-based character column of the byte at `offset` in the lossy decoding of
/// `line`. Each invalid sequence decodes to one replacement character.
fn char_column(line: &[u8], offset: usize) -> usize {
    let mut start = 0;
    let mut chars = 0;
    for chunk in line.utf8_chunks() {
        let widths = chunk.valid().chars().map(char::len_utf8);
        let invalid = Some(chunk.invalid().len()).filter(|&len| len > 0);
        for width in widths.chain(invalid) {
            if start > offset {
                return chars;
            }
            start += width;
            chars += 1;
        }
    }
    // Past the end of the line, one column per missing byte.
    chars + (offset + 1).saturating_sub(start)
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use bmc_util::Address;
/// use bmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
///
/// let diag = DiagnosticBuilder::error("unrecognized character '@'")
///     .code(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR)
///     .address(Address::new(1, 5))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    address: Address,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            address: Address::START,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source address
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            address: self.address,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
