//! Error types for the Mailtab library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`MailtabError`] enum.
//!
//! # Examples
//!
//! ```
//! use mailtab::error::{MailtabError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(MailtabError::configuration("no training data for label forums"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Mailtab operations.
#[derive(Error, Debug)]
pub enum MailtabError {
    /// I/O errors (reading corpus or stopword files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed corpus markup. `line` is 1-based.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The run cannot proceed with the data it was given
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required input file does not exist
    #[error("Missing resource: {}", .0.display())]
    MissingResource(PathBuf),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with MailtabError.
pub type Result<T> = std::result::Result<T, MailtabError>;

impl MailtabError {
    /// Create a new parse error for the given 1-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        MailtabError::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        MailtabError::Configuration(msg.into())
    }

    /// Create a new missing resource error.
    pub fn missing<P: Into<PathBuf>>(path: P) -> Self {
        MailtabError::MissingResource(path.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MailtabError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MailtabError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MailtabError::parse(3, "expected integer after .I");
        assert_eq!(
            error.to_string(),
            "Parse error at line 3: expected integer after .I"
        );

        let error = MailtabError::configuration("label social has no training documents");
        assert_eq!(
            error.to_string(),
            "Configuration error: label social has no training documents"
        );

        let error = MailtabError::missing("common_words");
        assert_eq!(error.to_string(), "Missing resource: common_words");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mailtab_error = MailtabError::from(io_error);

        match mailtab_error {
            MailtabError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
