//! Error types for Paydesk
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Paydesk operations
pub type PaydeskResult<T> = Result<T, PaydeskError>;

/// Main error type for Paydesk operations
#[derive(Error, Debug)]
pub enum PaydeskError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
