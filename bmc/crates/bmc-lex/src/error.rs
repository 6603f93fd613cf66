//! Lexical error types.
//!
//! Every failure the scanner can report is a [`LexError`] variant carrying the
//! address where the offending construct starts. End of input is never an
//! error.

use bmc_util::{Address, DiagnosticBuilder, DiagnosticCode, Level};
use thiserror::Error;

use crate::token::TokenKind;

/// Error type for scanning operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `/*` comment reached end of input without `*/`.
    ///
    /// The comment is treated as ending at end of input, so nothing is lost;
    /// this is reported at warning severity.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// Address of the opening `/`
        address: Address,
    },

    /// A string or character literal reached end of input without its
    /// closing delimiter.
    #[error("unterminated {kind} literal")]
    UnterminatedLiteral {
        /// [`TokenKind::String`] or [`TokenKind::Character`]
        kind: TokenKind,
        /// Address of the opening delimiter
        address: Address,
    },

    /// The character starts no token.
    #[error("unrecognized character {}", describe_byte(.byte))]
    UnrecognizedCharacter {
        /// The offending byte
        byte: u8,
        /// Where it was read
        address: Address,
    },

    /// A lexeme ran past the configured length bound. The whole run has been
    /// consumed.
    #[error("{kind} lexeme exceeds the maximum length of {limit} characters")]
    LexemeTooLong {
        /// Kind of token being scanned
        kind: TokenKind,
        /// The configured bound
        limit: usize,
        /// Address of the lexeme's first character
        address: Address,
    },

    /// `''`
    #[error("empty character literal")]
    EmptyCharacterLiteral {
        /// Address of the opening `'`
        address: Address,
    },

    /// A character literal whose content is not exactly one character or one
    /// backslash pair.
    #[error("character literal '{text}' must hold exactly one character")]
    InvalidCharacterLiteral {
        /// Raw content between the quotes
        text: String,
        /// Address of the opening `'`
        address: Address,
    },
}

fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", char::from(*byte))
    } else {
        format!("byte 0x{:02X}", byte)
    }
}

impl LexError {
    /// Where the offending construct starts.
    pub fn address(&self) -> Address {
        match self {
            LexError::UnterminatedComment { address }
            | LexError::UnterminatedLiteral { address, .. }
            | LexError::UnrecognizedCharacter { address, .. }
            | LexError::LexemeTooLong { address, .. }
            | LexError::EmptyCharacterLiteral { address }
            | LexError::InvalidCharacterLiteral { address, .. } => *address,
        }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedComment { .. } => DiagnosticCode::W_LEX_UNTERMINATED_COMMENT,
            LexError::UnterminatedLiteral { .. } => DiagnosticCode::E_LEX_UNTERMINATED_LITERAL,
            LexError::UnrecognizedCharacter { .. } => DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR,
            LexError::LexemeTooLong { .. } => DiagnosticCode::E_LEX_LEXEME_TOO_LONG,
            LexError::EmptyCharacterLiteral { .. } => DiagnosticCode::E_LEX_EMPTY_CHAR_LITERAL,
            LexError::InvalidCharacterLiteral { .. } => {
                DiagnosticCode::E_LEX_INVALID_CHAR_LITERAL
            },
        }
    }

    /// Only an unterminated block comment is a warning.
    pub fn severity(&self) -> Level {
        match self {
            LexError::UnterminatedComment { .. } => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Returns true when scanning lost nothing and the error is advisory.
    pub fn is_warning(&self) -> bool {
        self.severity().is_warning()
    }

    /// Starts a diagnostic for this error, with a short note or help line.
    ///
    /// Callers can attach a source snippet before building or emitting it.
    pub fn diagnostic(&self) -> DiagnosticBuilder {
        let builder = DiagnosticBuilder::new(self.severity(), self.to_string())
            .code(self.code())
            .address(self.address());
        match self {
            LexError::UnterminatedComment { .. } => {
                builder.note("the comment was treated as ending at end of input")
            },
            LexError::UnterminatedLiteral { kind, .. } => {
                let delimiter = if *kind == TokenKind::Character { '\'' } else { '"' };
                builder.help(format!("add a closing `{}`", delimiter))
            },
            LexError::LexemeTooLong { .. } => builder.note("the rest of the run was skipped"),
            LexError::EmptyCharacterLiteral { .. } => {
                builder.help("a character literal needs one character, e.g. 'a'")
            },
            LexError::InvalidCharacterLiteral { .. } => {
                builder.help("use a string literal for more than one character")
            },
            LexError::UnrecognizedCharacter { .. } => builder,
        }
    }
}

/// Result type alias for scanning operations
pub type LexResult<T> = std::result::Result<T, LexError>;
