//! bmc-util - Core Utilities and Foundation Types
//!
//! Shared types for the B-Minor compiler front end:
//!
//! - [`address`] - line/column positions in source text
//! - [`diagnostic`] - error and warning collection and rendering
//! - [`source`] - input bytes with a line table for snippets
//!
//! These types carry no scanning logic of their own; `bmc-lex` produces
//! addresses and converts its errors into [`Diagnostic`]s, and `bmc-drv`
//! collects them in a [`Handler`] and prints them.

#![warn(missing_docs)]

pub mod address;
pub mod diagnostic;
pub mod source;

pub use address::Address;
pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use source::SourceFile;
