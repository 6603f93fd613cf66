//! Reserved word table.
//!
//! The set is fixed at startup and read-only afterwards. Lookup is an exact,
//! case-sensitive match; `while2` and `While` are identifiers.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::token::TokenKind;

/// The reserved words, in alphabetical order.
pub const KEYWORDS: [&str; 15] = [
    "array", "boolean", "char", "else", "false", "for", "function", "if", "integer", "print",
    "return", "string", "true", "void", "while",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns true if `text` is a reserved word.
///
/// # Example
///
/// ```
/// use bmc_lex::keyword::is_keyword;
///
/// assert!(is_keyword("while"));
/// assert!(!is_keyword("while2"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Classifies an identifier-shaped lexeme.
pub fn classify(text: &str) -> TokenKind {
    if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}
