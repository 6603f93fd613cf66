//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, configuration, and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String and character literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{
    is_identifier_continue, is_identifier_start, is_whitespace, tokenize, Lexer, LexerConfig,
    Scanned, DEFAULT_MAX_LEXEME_LEN,
};
pub use self::operator::{is_operator_start, SINGLE_OPERATORS};
