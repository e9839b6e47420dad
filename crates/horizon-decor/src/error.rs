//! Error types for decoration asset setup.

use std::path::PathBuf;

/// Result type alias for decoration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or reloading decorations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file.
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// Icon theme lookup error.
    #[error(transparent)]
    Icons(#[from] horizon_decor_icons::Error),

    /// Button style error.
    #[error(transparent)]
    Style(#[from] horizon_decor_buttons::Error),

    /// Hot-reload error.
    #[cfg(feature = "hot-reload")]
    #[error("Hot-reload error: {0}")]
    HotReload(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
