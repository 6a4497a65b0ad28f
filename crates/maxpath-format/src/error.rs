//! Format error types

use maxpath_core::limits::ValidationError;
use thiserror::Error;

/// Result type alias for format operations
pub type FormatResult<T> = std::result::Result<T, FormatError>;

/// Format-specific error types
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Start-node file is empty, expected a path limit on the first line")]
    MissingLimit,

    #[error("Invalid path limit '{0}'")]
    InvalidLimit(String),

    #[error("Line {line}: {reason}")]
    InvalidRecord {
        line: usize,
        #[source]
        reason: ValidationError,
    },
}
