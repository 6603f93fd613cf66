//! Error handling for the bmc driver.
//!
//! Lexical errors are not driver errors: they are reported as diagnostics and
//! reflected in the exit status. A [`DriverError`] means the scan could not
//! run or its output could not be written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the bmc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing, malformed, or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The input that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
