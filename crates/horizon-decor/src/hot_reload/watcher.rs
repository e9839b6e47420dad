//! File watching for configuration and style hot-reload.

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{DebouncedEventKind, Debouncer, new_debouncer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use horizon_decor_buttons::LoadReport;

use crate::backend::AssetBackend;
use crate::config::DecorConfig;
use crate::decorations::Decorations;
use crate::targets;
use crate::{Error, Result};

/// Which file a change belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchedFile {
    /// The TOML configuration.
    Config,
    /// The button style resources.
    Style,
}

/// Type of file change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File was modified or created.
    Modified,
    /// File was removed.
    Removed,
}

/// Event indicating a watched file changed.
#[derive(Debug, Clone)]
pub struct ConfigChangeEvent {
    /// Path to the changed file.
    pub path: PathBuf,
    /// Which file it is.
    pub file: WatchedFile,
    /// Type of change.
    pub kind: ChangeKind,
}

/// Watches the configuration and style files for changes.
///
/// # Example
///
/// ```ignore
/// let mut watcher = ConfigWatcher::new()?;
/// watcher.watch_config("/etc/horizon/decor.toml")?;
///
/// // In the event loop:
/// let changes = watcher.poll();
/// if !changes.is_empty() {
///     watcher.apply(&mut decorations, &changes)?;
/// }
/// ```
pub struct ConfigWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<std::result::Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    watched: HashMap<PathBuf, WatchedFile>,
}

impl ConfigWatcher {
    /// Create a watcher with nothing watched.
    pub fn new() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let debouncer = new_debouncer(Duration::from_millis(100), tx)
            .map_err(|e| Error::HotReload(e.to_string()))?;

        Ok(Self {
            debouncer,
            rx,
            watched: HashMap::new(),
        })
    }

    /// Watch the configuration file.
    pub fn watch_config(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.watch(path.as_ref(), WatchedFile::Config)
    }

    /// Watch the button style file.
    pub fn watch_style(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.watch(path.as_ref(), WatchedFile::Style)
    }

    fn watch(&mut self, path: &Path, file: WatchedFile) -> Result<()> {
        let path = path.canonicalize().map_err(|e| Error::io(path, e))?;

        if !self.watched.contains_key(&path) {
            self.debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)
                .map_err(|e| Error::HotReload(e.to_string()))?;
            tracing::info!(target: targets::HOT_RELOAD, ?file, "watching {}", path.display());
        }
        self.watched.insert(path, file);

        Ok(())
    }

    /// Stop watching a file.
    pub fn unwatch(&mut self, path: impl AsRef<Path>) {
        let Ok(path) = path.as_ref().canonicalize() else {
            return;
        };

        if self.watched.remove(&path).is_some() {
            let _ = self.debouncer.watcher().unwatch(&path);
            tracing::info!(target: targets::HOT_RELOAD, "stopped watching {}", path.display());
        }
    }

    /// Stop watching every style file.
    fn unwatch_styles(&mut self) {
        let styles: Vec<PathBuf> = self
            .watched
            .iter()
            .filter(|(_, file)| **file == WatchedFile::Style)
            .map(|(path, _)| path.clone())
            .collect();
        for path in styles {
            self.unwatch(path);
        }
    }

    /// Collect pending changes. Call this in the event loop.
    pub fn poll(&mut self) -> Vec<ConfigChangeEvent> {
        let mut changes = vec![];

        loop {
            match self.rx.try_recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.kind != DebouncedEventKind::Any {
                            continue;
                        }
                        let Some(file) = self.watched.get(&event.path).copied() else {
                            continue;
                        };
                        let kind = if event.path.exists() {
                            ChangeKind::Modified
                        } else {
                            ChangeKind::Removed
                        };
                        changes.push(ConfigChangeEvent {
                            path: event.path,
                            file,
                            kind,
                        });
                    }
                }
                Ok(Err(e)) => {
                    tracing::warn!(target: targets::HOT_RELOAD, "file watcher error: {}", e);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!(target: targets::HOT_RELOAD, "file watcher disconnected");
                    break;
                }
            }
        }

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        changes.dedup_by(|a, b| a.path == b.path);

        changes
    }

    /// Apply changes to `decorations`.
    ///
    /// A configuration change reloads the configuration (defaults if the file
    /// was removed) and rewatches its style file. A style change reloads the
    /// buttons. Returns the button load report if anything was reloaded.
    pub fn apply<B: AssetBackend>(
        &mut self,
        decorations: &mut Decorations<B>,
        changes: &[ConfigChangeEvent],
    ) -> Result<Option<LoadReport>> {
        if let Some(change) = changes.iter().find(|c| c.file == WatchedFile::Config) {
            tracing::info!(target: targets::HOT_RELOAD, "reloading configuration {}", change.path.display());
            let config = DecorConfig::load(&change.path)?;
            let style = config.style.clone();
            let report = decorations.set_config(config)?;

            self.unwatch_styles();
            if let Some(style) = style {
                if let Err(e) = self.watch_style(&style) {
                    tracing::warn!(target: targets::HOT_RELOAD, "cannot watch style: {}", e);
                }
            }
            return Ok(Some(report));
        }

        if let Some(change) = changes.iter().find(|c| c.file == WatchedFile::Style) {
            tracing::info!(target: targets::HOT_RELOAD, "reloading style {}", change.path.display());
            return decorations.reload_style().map(Some);
        }

        Ok(None)
    }

    /// Get the number of watched files.
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Get the watched paths.
    pub fn watched_paths(&self) -> impl Iterator<Item = &Path> {
        self.watched.keys().map(|p| p.as_path())
    }
}
