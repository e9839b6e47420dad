//! Theme registry and rescan protocol.
//!
//! [`ThemeRegistry`] owns every parsed [`ThemeDescriptor`], keyed by name.
//! [`SharedThemeRegistry`] publishes whole registries atomically so lookups
//! never see a half-built one.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::context::SearchContext;
use crate::parser::parse_index;
use crate::targets;
use crate::types::{HICOLOR, ThemeDescriptor};

/// File name of a theme's index inside its directory.
pub const INDEX_FILE: &str = "index.theme";

/// All known themes plus the queue of names still to scan.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemeDescriptor>,
    pending: Vec<String>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a theme, replacing any theme with the same name.
    ///
    /// Returns the replaced descriptor.
    pub fn register(&mut self, theme: ThemeDescriptor) -> Option<ThemeDescriptor> {
        let replaced = self.themes.insert(theme.name.clone(), theme);
        if let Some(old) = &replaced {
            tracing::trace!(
                target: targets::REGISTRY,
                theme = %old.name,
                path = %old.index_path.display(),
                "replaced registered theme"
            );
        }
        replaced
    }

    /// Get a theme by name.
    pub fn lookup(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.themes.get(name)
    }

    /// Check if a theme is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if no theme is registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Names of all registered themes.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Drop every theme and every pending name.
    pub fn clear(&mut self) {
        self.themes.clear();
        self.pending.clear();
    }

    /// Queue a theme name for scanning.
    pub fn push_pending(&mut self, name: impl Into<String>) {
        self.pending.push(name.into());
    }

    /// Take the most recently queued theme name.
    pub fn pop_pending(&mut self) -> Option<String> {
        self.pending.pop()
    }

    /// Scan the configured theme, its ancestors and `hicolor` from the
    /// context's base roots into this registry.
    ///
    /// The registry is cleared first. Returns the number of registered themes.
    pub fn rescan(&mut self, context: &SearchContext) -> usize {
        self.clear();
        self.push_pending(HICOLOR);
        self.push_pending(context.theme());

        let mut scanned = HashSet::new();
        while let Some(name) = self.pop_pending() {
            if !scanned.insert(name.clone()) {
                tracing::trace!(target: targets::REGISTRY, theme = %name, "already scanned");
                continue;
            }

            // Lowest priority first, so the highest priority root registers last.
            for root in context.base_roots().iter().rev() {
                let index_path = root.join(&name).join(INDEX_FILE);
                if !index_path.is_file() {
                    continue;
                }
                match parse_index(&name, &index_path) {
                    Ok(theme) => {
                        if let Some(parent) = theme.scan_parent() {
                            self.push_pending(parent);
                        }
                        self.register(theme);
                    }
                    Err(e) => {
                        tracing::warn!(target: targets::REGISTRY, theme = %name, "{}", e);
                    }
                }
            }
        }

        tracing::debug!(
            target: targets::REGISTRY,
            theme = %context.theme(),
            themes = self.len(),
            "rescanned icon themes"
        );
        self.len()
    }

    /// Build a fresh registry from `context`.
    pub fn scan(context: &SearchContext) -> Self {
        let mut registry = Self::new();
        registry.rescan(context);
        registry
    }
}

/// A registry that can be swapped out while readers hold snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedThemeRegistry {
    inner: Arc<RwLock<Arc<ThemeRegistry>>>,
}

impl SharedThemeRegistry {
    /// Wrap a registry.
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// The currently published registry.
    pub fn snapshot(&self) -> Arc<ThemeRegistry> {
        Arc::clone(&self.inner.read())
    }

    /// Replace the published registry.
    pub fn publish(&self, registry: ThemeRegistry) {
        *self.inner.write() = Arc::new(registry);
    }
}
