//! Search roots, fallback directories and the active theme name.
//!
//! [`Environment`] is a snapshot of the variables lookup depends on, so the
//! context can be built from the real process environment or from a fixture.

use std::path::{Path, PathBuf};

use crate::gtk;
use crate::targets;
use crate::types::HICOLOR;

/// `XDG_DATA_DIRS` used when the variable is unset or empty.
pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Extension that is always searched last.
pub const XBM: &str = "xbm";

/// Extensions in preference order, derived from the enabled image formats.
pub fn default_extensions() -> Vec<String> {
    let mut extensions = Vec::new();
    if cfg!(feature = "png") {
        extensions.push("png".to_string());
    }
    if cfg!(feature = "svg") {
        extensions.push("svg".to_string());
    }
    if cfg!(feature = "xpm") {
        extensions.push("xpm".to_string());
    }
    extensions.push(XBM.to_string());
    extensions
}

/// Environment variables consulted when building a [`SearchContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `HOME`
    pub home: Option<PathBuf>,
    /// `XDG_DATA_HOME`
    pub data_home: Option<PathBuf>,
    /// `XDG_DATA_DIRS`, colon separated
    pub data_dirs: Option<String>,
    /// `XDG_CONFIG_HOME`
    pub config_home: Option<PathBuf>,
    /// `XDG_ICON_THEME`
    pub icon_theme: Option<String>,
}

impl Environment {
    /// Snapshot the process environment.
    pub fn capture() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }

        Self {
            home: var("HOME").map(PathBuf::from).or_else(dirs::home_dir),
            data_home: var("XDG_DATA_HOME").map(PathBuf::from),
            data_dirs: var("XDG_DATA_DIRS"),
            config_home: var("XDG_CONFIG_HOME").map(PathBuf::from),
            icon_theme: var("XDG_ICON_THEME"),
        }
    }

    /// `XDG_DATA_HOME`, or `$HOME/.local/share`.
    pub fn data_home(&self) -> Option<PathBuf> {
        self.data_home
            .clone()
            .or_else(|| self.home.as_ref().map(|h| h.join(".local/share")))
    }

    /// Entries of `XDG_DATA_DIRS`, or the defaults.
    pub fn data_dirs(&self) -> Vec<PathBuf> {
        self.data_dirs
            .as_deref()
            .filter(|dirs| !dirs.is_empty())
            .unwrap_or(DEFAULT_DATA_DIRS)
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// `XDG_CONFIG_HOME`, or `$HOME/.config`.
    pub fn config_home(&self) -> Option<PathBuf> {
        self.config_home
            .clone()
            .or_else(|| self.home.as_ref().map(|h| h.join(".config")))
    }

    /// Icon theme roots, highest priority first.
    pub fn icon_roots(&self) -> Vec<PathBuf> {
        let mut roots = Vec::new();
        if let Some(home) = &self.home {
            roots.push(home.join(".icons"));
        }
        if let Some(data_home) = self.data_home() {
            roots.push(data_home.join("icons"));
        }
        roots.extend(self.data_dirs().into_iter().map(|d| d.join("icons")));
        roots
    }

    /// Unthemed pixmap directories.
    pub fn pixmap_dirs(&self) -> Vec<PathBuf> {
        self.data_dirs()
            .into_iter()
            .map(|d| d.join("pixmaps"))
            .collect()
    }

    /// The icon theme the desktop asks for: `XDG_ICON_THEME`, then the
    /// legacy `~/.gtkrc-2.0`, then GTK 3 `settings.ini`.
    pub fn detect_icon_theme(&self) -> Option<String> {
        if let Some(theme) = &self.icon_theme {
            return Some(theme.clone());
        }

        let gtkrc = self.home.as_ref().map(|h| h.join(".gtkrc-2.0"));
        if let Some(theme) = gtkrc.and_then(|path| read_setting(&path, gtk::icon_theme_from_gtkrc)) {
            return Some(theme);
        }

        let settings = self.config_home().map(|c| c.join("gtk-3.0/settings.ini"));
        settings.and_then(|path| read_setting(&path, gtk::icon_theme_from_settings_ini))
    }
}

fn read_setting(
    path: &Path,
    read: fn(&Path) -> crate::Result<Option<String>>,
) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match read(path) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!(target: targets::CONTEXT, "{}", e);
            None
        }
    }
}

/// Everything an icon lookup needs besides the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    theme: String,
    base_roots: Vec<PathBuf>,
    fallback_dirs: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl SearchContext {
    /// Start building a context.
    pub fn builder() -> SearchContextBuilder {
        SearchContextBuilder::default()
    }

    /// Context for the current process environment.
    pub fn from_env() -> Self {
        Self::builder().environment(&Environment::capture()).build()
    }

    /// Configured theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Change the configured theme name.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    /// Icon theme roots, highest priority first.
    pub fn base_roots(&self) -> &[PathBuf] {
        &self.base_roots
    }

    /// Plain directories searched after every theme.
    pub fn fallback_dirs(&self) -> &[PathBuf] {
        &self.fallback_dirs
    }

    /// Extensions in preference order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// Builder for [`SearchContext`].
#[derive(Debug, Clone, Default)]
pub struct SearchContextBuilder {
    theme: Option<String>,
    environment: Option<Environment>,
    base_roots: Vec<PathBuf>,
    prepend_dirs: Vec<PathBuf>,
    append_dirs: Vec<PathBuf>,
    extensions: Option<Vec<String>>,
}

impl SearchContextBuilder {
    /// Use the roots, pixmap directories and theme preference of `env`.
    pub fn environment(mut self, env: &Environment) -> Self {
        self.environment = Some(env.clone());
        self
    }

    /// Set the theme explicitly. Takes precedence over the environment.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Add an icon theme root after the environment's roots.
    pub fn base_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.base_roots.push(root.into());
        self
    }

    /// Add a plain directory searched before the pixmap directories.
    pub fn prepend_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prepend_dirs.push(dir.into());
        self
    }

    /// Add a plain directory searched after the pixmap directories.
    pub fn append_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.append_dirs.push(dir.into());
        self
    }

    /// Override the extension preference list. `xbm` is appended if missing.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Build the context.
    pub fn build(self) -> SearchContext {
        let env = self.environment.as_ref();

        let theme = self
            .theme
            .or_else(|| env.and_then(Environment::detect_icon_theme))
            .unwrap_or_else(|| HICOLOR.to_string());

        let mut base_roots = env.map(Environment::icon_roots).unwrap_or_default();
        base_roots.extend(self.base_roots);
        dedup_preserving_order(&mut base_roots);

        let mut fallback_dirs = self.prepend_dirs;
        fallback_dirs.extend(env.map(Environment::pixmap_dirs).unwrap_or_default());
        fallback_dirs.extend(self.append_dirs);
        dedup_preserving_order(&mut fallback_dirs);

        let mut extensions = self.extensions.unwrap_or_else(default_extensions);
        extensions.retain(|ext| ext != XBM);
        extensions.push(XBM.to_string());

        tracing::debug!(
            target: targets::CONTEXT,
            theme = %theme,
            roots = base_roots.len(),
            fallback_dirs = fallback_dirs.len(),
            "built icon search context"
        );

        SearchContext {
            theme,
            base_roots,
            fallback_dirs,
            extensions,
        }
    }
}

fn dedup_preserving_order(paths: &mut Vec<PathBuf>) {
    let mut seen = std::collections::HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));
}
