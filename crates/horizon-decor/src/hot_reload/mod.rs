//! Hot-reload support for the configuration and button style files.
//!
//! This module is only available with the `hot-reload` feature.

mod watcher;

pub use watcher::{ChangeKind, ConfigChangeEvent, ConfigWatcher, WatchedFile};
