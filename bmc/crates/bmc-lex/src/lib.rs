//! bmc-lex - Lexical Analyzer for the B-Minor Language
//!
//! This crate turns B-Minor source text into a stream of classified tokens
//! for the rest of the compiler front end.
//!
//! # Example Usage
//!
//! ```
//! use bmc_lex::{Lexer, Scanned, TokenKind};
//!
//! let mut lexer = Lexer::new("while (x >= 10) x = x - 1;");
//!
//! // Get tokens one at a time
//! let Ok(Scanned::Token(first)) = lexer.next_token() else {
//!     panic!("expected a token");
//! };
//! assert_eq!(first.kind(), TokenKind::Keyword);
//! assert_eq!(first.text(), "while");
//!
//! // Or iterate through the rest
//! for token in &mut lexer {
//!     println!("{}", token.unwrap());
//! }
//! assert_eq!(lexer.next_token(), Ok(Scanned::EndOfInput));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with bounded pushback
//! - [`keyword`] - Reserved word table
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `array`, `boolean`, `char`, `else`, `false`, `for`, `function`, `if`,
//! `integer`, `print`, `return`, `string`, `true`, `void`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, matched exactly against the keywords.
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007` (digits only, kept as text)
//! - **Character**: `'a'`, `'\n'`
//! - **String**: `"hello"`, `"say \"hi\""`
//!
//! ## Operators
//!
//! - **Single**: `(` `)` `[` `]` `{` `}` `;` `:` `,` `*` `/` `%` `^`
//! - **Doubling**: `+` `++` `-` `--` `&` `&&` `|` `||`
//! - **Comparison**: `<` `<=` `>` `>=` `!` `!=` `=` `==`
//!
//! ## Trivia
//!
//! Whitespace, `// line comments` and `/* block comments */` are skipped.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use keyword::{classify, is_keyword, KEYWORDS};
pub use lexer::{tokenize, Lexer, LexerConfig, Scanned, DEFAULT_MAX_LEXEME_LEN};
pub use token::{Token, TokenKind};
