//! Error types for vitae library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vitae operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be read.
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON or does not match the expected structure.
    #[error("malformed input data: {0}")]
    Json(#[from] serde_json::Error),

    /// A field needed by the selected output mode is absent.
    #[error("missing required field: '{0}'")]
    MissingField(String),

    /// Letter and reference-sheet modes were both requested.
    #[error("arguments '--letter' and '--references' conflict")]
    ConflictingModes,

    /// Error while producing formatted output.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error was caused by the caller's arguments rather than
    /// by the input data or the environment.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::ConflictingModes)
    }
}
