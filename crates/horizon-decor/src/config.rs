//! Decoration configuration.
//!
//! Configuration lives in a TOML file. Every field is optional:
//!
//! ```toml
//! icon_theme = "Papirus"
//! icon_size = 32
//! prepend_dirs = ["/opt/wm/icons"]
//! append_dirs = []
//! extensions = ["svg", "png"]
//! style = "/usr/share/horizon/styles/plain/style"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use horizon_decor_buttons::StyleResources;
use horizon_decor_icons::{Environment, SearchContext};
use serde::Deserialize;

use crate::targets;
use crate::{Error, Result};

/// Window icon size used when the configuration does not set one.
pub const DEFAULT_ICON_SIZE: u32 = 48;

/// Icon and button style settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    /// Icon theme to use. Detected from the desktop when unset.
    pub icon_theme: Option<String>,
    /// Preferred window icon size in pixels.
    pub icon_size: u32,
    /// Plain icon directories searched before the system pixmap directories.
    pub prepend_dirs: Vec<PathBuf>,
    /// Plain icon directories searched after the system pixmap directories.
    pub append_dirs: Vec<PathBuf>,
    /// File extensions in preference order. Derived from the enabled image
    /// formats when unset.
    pub extensions: Option<Vec<String>>,
    /// Button style resource file.
    pub style: Option<PathBuf>,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            icon_theme: None,
            icon_size: DEFAULT_ICON_SIZE,
            prepend_dirs: Vec::new(),
            append_dirs: Vec::new(),
            extensions: None,
            style: None,
        }
    }
}

impl DecorConfig {
    /// Parse configuration text. `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: impl AsRef<Path>) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(path.as_ref(), e.to_string()))
    }

    /// Read a configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml_str(&content, path)?;
                tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    target: targets::CONFIG,
                    path = %path.display(),
                    "no configuration file, using defaults"
                );
                Ok(Self::default())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Build the icon search context for `env`.
    pub fn search_context(&self, env: &Environment) -> SearchContext {
        let mut builder = SearchContext::builder().environment(env);
        if let Some(theme) = &self.icon_theme {
            builder = builder.theme(theme.as_str());
        }
        for dir in &self.prepend_dirs {
            builder = builder.prepend_dir(dir.as_path());
        }
        for dir in &self.append_dirs {
            builder = builder.append_dir(dir.as_path());
        }
        if let Some(extensions) = &self.extensions {
            builder = builder.extensions(extensions.iter().map(String::as_str));
        }
        builder.build()
    }

    /// Read the configured style file, if any.
    pub fn style_resources(&self) -> Result<Option<StyleResources>> {
        self.style
            .as_deref()
            .map(StyleResources::load)
            .transpose()
            .map_err(Error::from)
    }
}
