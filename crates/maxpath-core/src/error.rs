//! Error types for Maxpath Core

use thiserror::Error;

/// Result type alias using Maxpath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Maxpath error types
///
/// An interrupted search is not an error; it is reported as
/// [`crate::Enumeration::Aborted`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Generator error: {0}")]
    Generator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
