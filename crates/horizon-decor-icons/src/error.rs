//! Error types for icon theme lookup.

use std::path::PathBuf;

/// Result type alias for icon theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading icon themes.
///
/// A missing icon is never an error; lookups report it as `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An index file or settings file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A GTK settings file could not be parsed.
    #[error("Failed to parse GTK settings '{path}': {message}")]
    Settings { path: PathBuf, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse error.
    pub fn settings(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Settings {
            path: path.into(),
            message: message.into(),
        }
    }
}
