//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, its configuration, and the token
//! driver that dispatches on the first character of each token.

use std::iter::FusedIterator;

use bmc_util::Address;
use tracing::{debug, trace};

use super::operator::is_operator_start;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

/// Default bound on a single lexeme, in characters.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 499;

/// Tunable limits for a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Longest identifier, integer, or literal content accepted before the
    /// scanner reports [`LexError::LexemeTooLong`].
    pub max_lexeme_len: usize,
}

impl LexerConfig {
    /// Returns a config with a different lexeme bound.
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: DEFAULT_MAX_LEXEME_LEN,
        }
    }
}

/// Outcome of a successful call to [`Lexer::next_token`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scanned {
    /// A complete token.
    Token(Token),
    /// No input remains. Returned again on every later call.
    EndOfInput,
}

impl Scanned {
    /// Returns the token, or `None` at end of input.
    pub fn into_token(self) -> Option<Token> {
        match self {
            Scanned::Token(token) => Some(token),
            Scanned::EndOfInput => None,
        }
    }
}

/// Lexer for the B-Minor language.
///
/// A lexer owns its scan state, so independent lexers can run side by side.
/// Errors are returned from [`Lexer::next_token`] and do not end the scan:
/// the offending characters have been consumed and the next call picks up
/// after them.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Limits for this scan.
    pub(crate) config: LexerConfig,

    /// Set once end of input has been reported.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new<S: AsRef<[u8]> + ?Sized>(source: &'a S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config<S: AsRef<[u8]> + ?Sized>(source: &'a S, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source.as_ref()),
            config,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and comments before the token are skipped first. An
    /// unterminated block comment is reported as
    /// [`LexError::UnterminatedComment`]; the call after it returns
    /// [`Scanned::EndOfInput`].
    pub fn next_token(&mut self) -> LexResult<Scanned> {
        if self.finished {
            return Ok(Scanned::EndOfInput);
        }

        self.skip_trivia()?;

        let Some(ch) = self.cursor.next_char() else {
            trace!("end of input");
            self.finished = true;
            return Ok(Scanned::EndOfInput);
        };
        let address = self.cursor.address();

        match self.dispatch(ch, address) {
            Ok(token) => {
                trace!(
                    kind = %token.kind(),
                    text = token.text(),
                    line = address.line,
                    column = address.column,
                    "token"
                );
                Ok(Scanned::Token(token))
            },
            Err(error) => {
                debug!(%error, line = address.line, column = address.column, "lexical error");
                Err(error)
            },
        }
    }

    /// Selects the scanner for a token whose first character is `ch`.
    fn dispatch(&mut self, ch: u8, address: Address) -> LexResult<Token> {
        match ch {
            b'"' => self.lex_string(address),
            b'\'' => self.lex_character(address),
            c if c.is_ascii_digit() => self.lex_integer(c, address),
            c if is_identifier_start(c) => self.lex_identifier(c, address),
            c if is_operator_start(c) => Ok(self.lex_operator(c, address)),
            byte => Err(LexError::UnrecognizedCharacter { byte, address }),
        }
    }

    /// Consumes the maximal run of characters accepted by `accept`, starting
    /// with the already consumed `first`, and pushes back the terminator.
    ///
    /// The whole run is consumed even when it exceeds the lexeme bound.
    pub(crate) fn scan_run(
        &mut self,
        first: u8,
        kind: TokenKind,
        address: Address,
        accept: fn(u8) -> bool,
    ) -> LexResult<String> {
        let limit = self.config.max_lexeme_len;
        let mut text = String::from(char::from(first));
        let mut overflowed = text.len() > limit;

        loop {
            let ch = self.cursor.next_char();
            match ch {
                Some(c) if accept(c) => {
                    if text.len() < limit {
                        text.push(char::from(c));
                    } else {
                        overflowed = true;
                    }
                },
                _ => {
                    self.cursor.pushback(ch);
                    break;
                },
            }
        }

        if overflowed {
            return Err(LexError::LexemeTooLong {
                kind,
                limit,
                address,
            });
        }
        Ok(text)
    }

    /// Returns the configuration of this lexer.
    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Returns the address of the last consumed character.
    pub fn address(&self) -> Address {
        self.cursor.address()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Scanned::Token(token)) => Some(Ok(token)),
            Ok(Scanned::EndOfInput) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

/// Scans `source` to the end, stopping at the first error.
///
/// # Example
///
/// ```
/// use bmc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 42;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Integer, TokenKind::Operator]
/// );
/// ```
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> LexResult<Vec<Token>> {
    Lexer::new(source).collect()
}

/// `[A-Za-z_]`
pub fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// `[A-Za-z0-9_]`
pub fn is_identifier_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// ASCII whitespace, including vertical tab and form feed.
pub fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
