//! Error types for generation and export operations

use thiserror::Error;

/// Errors that can occur while validating, generating or exporting a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration rejected at the boundary (e.g. block count out of range)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation or parameter
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Reading or writing a file failed
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}
