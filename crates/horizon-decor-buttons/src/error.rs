//! Error types for button styles.

use std::path::PathBuf;

/// Result type alias for button style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading button styles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A style file could not be read.
    #[error("Failed to read style '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
