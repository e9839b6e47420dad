//! The decoration asset facade.

use std::path::PathBuf;

use horizon_decor_buttons::{
    ButtonKind, ButtonState, ButtonStyle, LoadReport, StyleResources, VariantSlot,
};
use horizon_decor_icons::{Environment, IconSearch};

use crate::backend::{AssetBackend, BackendLoader};
use crate::config::DecorConfig;
use crate::targets;
use crate::Result;

/// Icon theme and button style state for one window manager.
///
/// # Example
///
/// ```ignore
/// let config = DecorConfig::load("/etc/horizon/decor.toml")?;
/// let mut decor = Decorations::new(config, backend)?;
///
/// let icon = decor.window_icon(&[class, instance], 32);
/// let close = decor.button(ButtonKind::Close, &state);
/// ```
pub struct Decorations<B: AssetBackend> {
    config: DecorConfig,
    environment: Environment,
    icons: IconSearch,
    style: ButtonStyle<B::Handle>,
    backend: B,
}

impl<B: AssetBackend> Decorations<B> {
    /// Set up decorations for the process environment.
    pub fn new(config: DecorConfig, backend: B) -> Result<Self> {
        Self::with_environment(config, Environment::capture(), backend)
    }

    /// Set up decorations for an explicit environment.
    pub fn with_environment(config: DecorConfig, environment: Environment, backend: B) -> Result<Self> {
        let icons = IconSearch::new(config.search_context(&environment));
        let mut decorations = Self {
            config,
            environment,
            icons,
            style: ButtonStyle::new(),
            backend,
        };
        decorations.reload()?;
        Ok(decorations)
    }

    /// The active configuration.
    pub fn config(&self) -> &DecorConfig {
        &self.config
    }

    /// Replace the configuration and reload everything.
    pub fn set_config(&mut self, config: DecorConfig) -> Result<LoadReport> {
        self.icons = IconSearch::new(config.search_context(&self.environment));
        self.config = config;
        self.reload()
    }

    /// Switch icon themes and scan the new theme chain.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        let theme = theme.into();
        tracing::info!(target: targets::DECORATIONS, theme = %theme, "switching icon theme");
        self.config.icon_theme = Some(theme.clone());
        self.icons.set_theme(theme);
        self.icons.rescan();
    }

    /// Rescan icon themes and reload the button style.
    ///
    /// On a style read error the previous buttons stay loaded.
    pub fn reload(&mut self) -> Result<LoadReport> {
        let themes = self.icons.rescan();
        let report = self.reload_style()?;
        tracing::info!(
            target: targets::DECORATIONS,
            theme = self.icons.theme_name(),
            themes,
            buttons = report.loaded,
            "reloaded decorations"
        );
        Ok(report)
    }

    /// Reload only the button style.
    pub fn reload_style(&mut self) -> Result<LoadReport> {
        let resources = self.config.style_resources()?.unwrap_or_default();
        Ok(self.load_style(&resources))
    }

    /// Replace every button variant with the ones `resources` name.
    pub fn load_style(&mut self, resources: &StyleResources) -> LoadReport {
        self.style.reload(resources, &mut BackendLoader(&mut self.backend))
    }

    /// Path of the icon to use for a window, trying `names` in order.
    pub fn icon_path<S: AsRef<str>>(&self, names: &[S], size: u32) -> Option<PathBuf> {
        self.icons.resolve(names, size)
    }

    /// Decoded icon for a window, trying `names` in order.
    pub fn window_icon<S: AsRef<str>>(&mut self, names: &[S], size: u32) -> Option<B::Handle> {
        let path = self.icon_path(names, size)?;
        match self.backend.decode(&path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(
                    target: targets::DECORATIONS,
                    path = %path.display(),
                    "failed to decode window icon: {}",
                    e
                );
                None
            }
        }
    }

    /// Window icon at the configured size.
    pub fn default_window_icon<S: AsRef<str>>(&mut self, names: &[S]) -> Option<B::Handle> {
        self.window_icon(names, self.config.icon_size)
    }

    /// Variant to draw for a button, or `None` to leave it undrawn.
    pub fn button(&self, kind: ButtonKind, state: &ButtonState) -> Option<&VariantSlot<B::Handle>> {
        self.style.resolve(kind, state)
    }

    /// Active icon theme name.
    pub fn theme_name(&self) -> &str {
        self.icons.theme_name()
    }

    /// Display name of the active icon theme, if it was found.
    pub fn theme_display_name(&self) -> Option<String> {
        self.icons.theme_display_name()
    }

    /// Index file of the active icon theme, if it was found.
    pub fn theme_path(&self) -> Option<PathBuf> {
        self.icons.theme_path()
    }

    /// The icon search engine.
    pub fn icons(&self) -> &IconSearch {
        &self.icons
    }

    /// Loaded button variants.
    pub fn style(&self) -> &ButtonStyle<B::Handle> {
        &self.style
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
