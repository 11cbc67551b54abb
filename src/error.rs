//! Error types of this crate.

use thiserror::Error;

/// Errors that can appear while parsing a commented JSON document.
///
/// Comment stripping itself never fails. Both variants come from the
/// collaborators around it and are passed through unchanged: reading the
/// input file, and decoding the stripped text as JSON.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the input file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The text left after comment removal is not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
