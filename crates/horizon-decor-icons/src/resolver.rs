//! Icon resolution and caching.
//!
//! This module provides the [`IconSearch`] engine, which turns a prioritized
//! list of icon names and a pixel size into a file on disk. Lookups go through
//! the configured theme and its ancestors, then `hicolor`, then the plain
//! fallback directories.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::context::SearchContext;
use crate::registry::{SharedThemeRegistry, ThemeRegistry};
use crate::targets;
use crate::types::{HICOLOR, ThemeDescriptor};

/// Cache key for resolved icons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    names: Vec<String>,
    size: u32,
    extensions: Vec<String>,
}

/// Cached resolution result.
#[derive(Debug, Clone)]
enum CacheEntry {
    /// Found icon at this path
    Found(PathBuf),
    /// Icon not found
    NotFound,
}

/// Icon search engine with caching.
#[derive(Debug)]
pub struct IconSearch {
    context: SearchContext,
    registry: SharedThemeRegistry,
    cache: Mutex<HashMap<CacheKey, CacheEntry>>,
    cache_limit: usize,
}

impl IconSearch {
    /// Create an engine with an empty registry. Call [`rescan`](Self::rescan)
    /// before resolving.
    pub fn new(context: SearchContext) -> Self {
        Self::with_registry(context, SharedThemeRegistry::default())
    }

    /// Create an engine over an existing registry.
    pub fn with_registry(context: SearchContext, registry: SharedThemeRegistry) -> Self {
        Self {
            context,
            registry,
            cache: Mutex::new(HashMap::new()),
            cache_limit: 1000,
        }
    }

    /// Create an engine for the process environment and scan its themes.
    pub fn from_env() -> Self {
        let search = Self::new(SearchContext::from_env());
        search.rescan();
        search
    }

    /// The search context.
    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    /// Snapshot of the current registry.
    pub fn registry(&self) -> Arc<ThemeRegistry> {
        self.registry.snapshot()
    }

    /// Handle to the shared registry.
    pub fn shared_registry(&self) -> &SharedThemeRegistry {
        &self.registry
    }

    /// Set the active theme name.
    ///
    /// Themes are only read by [`rescan`](Self::rescan), so call it afterwards
    /// if the new theme has not been scanned yet.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.context.set_theme(theme);
        self.clear_cache();
    }

    /// Rebuild the registry from disk and publish it.
    ///
    /// Returns the number of themes found.
    pub fn rescan(&self) -> usize {
        let registry = ThemeRegistry::scan(&self.context);
        let count = registry.len();
        self.registry.publish(registry);
        self.clear_cache();
        count
    }

    /// Active theme name.
    pub fn theme_name(&self) -> &str {
        self.context.theme()
    }

    /// `Name=` of the active theme, if it was found.
    pub fn theme_display_name(&self) -> Option<String> {
        self.registry()
            .lookup(self.context.theme())
            .map(|theme| theme.display_name().to_string())
    }

    /// Index file of the active theme, if it was found.
    pub fn theme_path(&self) -> Option<PathBuf> {
        self.registry()
            .lookup(self.context.theme())
            .map(|theme| theme.index_path.clone())
    }

    /// Clear the resolution cache.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Set the cache limit.
    pub fn set_cache_limit(&mut self, limit: usize) {
        self.cache_limit = limit;
        let mut cache = self.cache.lock();
        if cache.len() > limit {
            cache.clear();
        }
    }

    /// Resolve the first of `names` that exists, preferring files that fit
    /// `size`, using the context's extension preferences.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S], size: u32) -> Option<PathBuf> {
        self.resolve_with_extensions(names, size, self.context.extensions())
    }

    /// Resolve with an explicit extension preference list.
    pub fn resolve_with_extensions<S, E>(
        &self,
        names: &[S],
        size: u32,
        extensions: &[E],
    ) -> Option<PathBuf>
    where
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let key = CacheKey {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            size,
            extensions: extensions.iter().map(|e| e.as_ref().to_string()).collect(),
        };

        if let Some(entry) = self.cache.lock().get(&key) {
            return match entry {
                CacheEntry::Found(path) => Some(path.clone()),
                CacheEntry::NotFound => None,
            };
        }

        let registry = self.registry();
        let lookup = Lookup::new(&registry, &self.context, &key.names, size, &key.extensions);
        let result = lookup.resolve(self.context.theme());

        tracing::debug!(
            target: targets::RESOLVER,
            names = ?key.names,
            size,
            found = ?result,
            "resolved icon"
        );

        let mut cache = self.cache.lock();
        if cache.len() < self.cache_limit {
            let entry = match &result {
                Some(path) => CacheEntry::Found(path.clone()),
                None => CacheEntry::NotFound,
            };
            cache.insert(key, entry);
        }

        result
    }

    /// Resolve within `theme` and its ancestors only, without the `hicolor`
    /// and plain directory fallbacks.
    pub fn resolve_in_theme<S: AsRef<str>>(
        &self,
        names: &[S],
        size: u32,
        theme: &str,
    ) -> Option<PathBuf> {
        let registry = self.registry();
        let lookup = Lookup::new(&registry, &self.context, names, size, self.context.extensions());
        lookup.in_theme(theme, &mut HashSet::new())
    }
}

/// One resolution request bound to a registry snapshot.
struct Lookup<'a> {
    registry: &'a ThemeRegistry,
    roots: &'a [PathBuf],
    fallback_dirs: &'a [PathBuf],
    names: Vec<&'a str>,
    extensions: Vec<&'a str>,
    size: u32,
}

impl<'a> Lookup<'a> {
    fn new<S: AsRef<str>, E: AsRef<str>>(
        registry: &'a ThemeRegistry,
        context: &'a SearchContext,
        names: &'a [S],
        size: u32,
        extensions: &'a [E],
    ) -> Self {
        Self {
            registry,
            roots: context.base_roots(),
            fallback_dirs: context.fallback_dirs(),
            names: names
                .iter()
                .map(AsRef::as_ref)
                .filter(|n| !n.is_empty())
                .collect(),
            extensions: extensions.iter().map(AsRef::as_ref).collect(),
            size,
        }
    }

    fn resolve(&self, theme: &str) -> Option<PathBuf> {
        if self.names.is_empty() {
            return None;
        }
        self.in_theme(theme, &mut HashSet::new())
            .or_else(|| self.in_theme(HICOLOR, &mut HashSet::new()))
            .or_else(|| self.in_fallback_dirs())
    }

    fn in_theme(&self, theme: &str, visited: &mut HashSet<String>) -> Option<PathBuf> {
        if !visited.insert(theme.to_string()) {
            tracing::trace!(target: targets::RESOLVER, theme, "theme already searched");
            return None;
        }
        let descriptor = self.registry.lookup(theme)?;

        if let Some(path) = self.exact_match(descriptor).or_else(|| self.closest_match(descriptor)) {
            return Some(path);
        }

        let parent = descriptor.inherits.as_deref()?;
        self.in_theme(parent, visited)
    }

    /// First file in a directory that serves `size` as-is, trying every
    /// name before any distance fallback.
    fn exact_match(&self, theme: &ThemeDescriptor) -> Option<PathBuf> {
        for name in &self.names {
            for dir in theme.directories.iter().filter(|d| d.matches_size(self.size)) {
                for root in self.roots {
                    let base = root.join(&theme.name).join(&dir.name);
                    for ext in &self.extensions {
                        if let Some(path) = probe(&base, name, ext) {
                            return Some(path);
                        }
                    }
                }
            }
        }
        None
    }

    /// Existing file with the smallest size distance, per name in order.
    /// Ties keep the first file found.
    fn closest_match(&self, theme: &ThemeDescriptor) -> Option<PathBuf> {
        for name in &self.names {
            let mut best: Option<(u32, PathBuf)> = None;
            for dir in &theme.directories {
                let distance = dir.size_distance(self.size);
                for root in self.roots {
                    let base = root.join(&theme.name).join(&dir.name);
                    for ext in &self.extensions {
                        if best.as_ref().is_some_and(|(d, _)| distance >= *d) {
                            continue;
                        }
                        if let Some(path) = probe(&base, name, ext) {
                            best = Some((distance, path));
                        }
                    }
                }
            }
            if let Some((_, path)) = best {
                return Some(path);
            }
        }
        None
    }

    fn in_fallback_dirs(&self) -> Option<PathBuf> {
        for name in &self.names {
            for dir in self.fallback_dirs {
                for ext in &self.extensions {
                    if let Some(path) = probe(dir, name, ext) {
                        return Some(path);
                    }
                }
            }
        }
        None
    }
}

/// Check `<dir>/<name>.<ext>`, then the same path with a lower-cased file
/// name.
fn probe(dir: &Path, name: &str, ext: &str) -> Option<PathBuf> {
    let path = dir.join(format!("{}.{}", name, ext));
    if is_readable_file(&path) {
        return Some(path);
    }

    let file_name = path.file_name()?.to_str()?;
    let lower = file_name.to_lowercase();
    if lower == file_name {
        return None;
    }
    let path = path.with_file_name(lower);
    is_readable_file(&path).then_some(path)
}

fn is_readable_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file()) && fs::File::open(path).is_ok()
}
