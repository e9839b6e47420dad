//! Button styles and loading them from style resources.
//!
//! A style is a resource file of `key: value` lines. Button looks are named
//! by suffix, for example:
//!
//! ```text
//! button.close.pixmap:              close.xpm
//! button.close.pressed.b1.pixmap:   close-pressed-left.png
//! button.close.pressed.b1.color:    #a03030
//! button.maximize.toggled.focus.pixmap: restore.png
//! ```
//!
//! Pixmap paths are relative to the style file's directory.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::resolver::{resolve_variant, select_variant};
use crate::state::ButtonState;
use crate::table::{VariantSlot, VariantTable};
use crate::targets;
use crate::variant::{ButtonKind, ButtonVariant};
use crate::{Error, Result};

/// Resource property naming a variant's image file.
pub const PIXMAP_PROPERTY: &str = "pixmap";

/// Resource property naming a variant's background color.
pub const COLOR_PROPERTY: &str = "color";

/// Key/value resources read from a style file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleResources {
    values: HashMap<String, String>,
    base_dir: PathBuf,
}

impl StyleResources {
    /// Create an empty resource set resolving files against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            values: HashMap::new(),
            base_dir: base_dir.into(),
        }
    }

    /// Read a style file. Files are resolved relative to its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::parse(&content, base_dir))
    }

    /// Parse style text. Later keys override earlier ones.
    pub fn parse(content: &str, base_dir: impl Into<PathBuf>) -> Self {
        let mut resources = Self::new(base_dir);
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('!') || line.starts_with('#') {
                continue;
            }
            match line.split_once(':') {
                Some((key, value)) => resources.set(key.trim(), value.trim()),
                None => {
                    tracing::warn!(target: targets::STYLE, line, "ignoring malformed style line");
                }
            }
        }
        resources
    }

    /// Set a resource.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a resource.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Directory that relative file names are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Image file for a variant, if the style names one.
    pub fn pixmap_path(&self, kind: ButtonKind, variant: ButtonVariant) -> Option<PathBuf> {
        self.get(&variant.resource_key(kind, PIXMAP_PROPERTY))
            .filter(|file| !file.is_empty())
            .map(|file| self.base_dir.join(file))
    }

    /// Background override for a variant, if set and valid.
    pub fn background(&self, kind: ButtonKind, variant: ButtonVariant) -> Option<Color> {
        let key = variant.resource_key(kind, COLOR_PROPERTY);
        let value = self.get(&key)?;
        let color = Color::parse(value);
        if color.is_none() {
            tracing::warn!(target: targets::STYLE, key = %key, value, "invalid color");
        }
        color
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no resources.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Backend entry point that turns an image file into pixel data.
pub trait VariantLoader {
    /// Backend pixel data handle.
    type Handle;
    /// Backend load error.
    type Error: fmt::Display;

    /// Load the image at `path`.
    fn load_variant(&mut self, path: &Path) -> std::result::Result<Self::Handle, Self::Error>;
}

/// A variant that the style named but the backend could not load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Button the variant belongs to.
    pub kind: ButtonKind,
    /// Variant that stayed empty.
    pub variant: ButtonVariant,
    /// File that failed.
    pub path: PathBuf,
    /// Backend error message.
    pub message: String,
}

/// Outcome of loading a style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of variants loaded.
    pub loaded: usize,
    /// Variants that failed to load.
    pub failed: Vec<LoadFailure>,
}

/// Loaded variants for every button kind.
#[derive(Debug, Clone)]
pub struct ButtonStyle<H> {
    tables: [VariantTable<H>; ButtonKind::COUNT],
}

impl<H> ButtonStyle<H> {
    /// Create a style with nothing loaded.
    pub fn new() -> Self {
        Self {
            tables: std::array::from_fn(|_| VariantTable::new()),
        }
    }

    /// Variants of one button.
    pub fn table(&self, kind: ButtonKind) -> &VariantTable<H> {
        &self.tables[kind.index()]
    }

    /// Mutable variants of one button.
    pub fn table_mut(&mut self, kind: ButtonKind) -> &mut VariantTable<H> {
        &mut self.tables[kind.index()]
    }

    /// Variant to draw for `kind` in `state`.
    pub fn select(&self, kind: ButtonKind, state: &ButtonState) -> Option<ButtonVariant> {
        select_variant(state, self.table(kind))
    }

    /// Slot to draw for `kind` in `state`.
    pub fn resolve(&self, kind: ButtonKind, state: &ButtonState) -> Option<&VariantSlot<H>> {
        resolve_variant(state, self.table(kind)).map(|(_, slot)| slot)
    }

    /// Drop every loaded variant of every button.
    pub fn clear(&mut self) {
        self.tables.iter_mut().for_each(VariantTable::clear);
    }

    /// Total number of loaded variants.
    pub fn len(&self) -> usize {
        self.tables.iter().map(VariantTable::len).sum()
    }

    /// Check if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load every variant the resources name, through `loader`.
    ///
    /// Variants the backend fails to load stay empty and are listed in the
    /// report. Existing slots are replaced only by successful loads.
    pub fn load<L>(&mut self, resources: &StyleResources, loader: &mut L) -> LoadReport
    where
        L: VariantLoader<Handle = H>,
    {
        let mut report = LoadReport::default();

        for kind in ButtonKind::ALL {
            for variant in ButtonVariant::ALL {
                let Some(path) = resources.pixmap_path(kind, variant) else {
                    continue;
                };
                match loader.load_variant(&path) {
                    Ok(handle) => {
                        let slot = VariantSlot {
                            handle,
                            background: resources.background(kind, variant),
                        };
                        self.table_mut(kind).insert(variant, slot);
                        report.loaded += 1;
                    }
                    Err(e) => {
                        tracing::warn!(
                            target: targets::STYLE,
                            button = %kind,
                            ?variant,
                            path = %path.display(),
                            "failed to load button variant: {}",
                            e
                        );
                        report.failed.push(LoadFailure {
                            kind,
                            variant,
                            path,
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            target: targets::STYLE,
            loaded = report.loaded,
            failed = report.failed.len(),
            "loaded button style"
        );
        report
    }

    /// Drop every variant, then load the resources again.
    pub fn reload<L>(&mut self, resources: &StyleResources, loader: &mut L) -> LoadReport
    where
        L: VariantLoader<Handle = H>,
    {
        self.clear();
        self.load(resources, loader)
    }
}

impl<H> Default for ButtonStyle<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loads any path that does not contain "broken", handing back the path.
    struct PathLoader;

    impl VariantLoader for PathLoader {
        type Handle = PathBuf;
        type Error = String;

        fn load_variant(&mut self, path: &Path) -> std::result::Result<PathBuf, String> {
            if path.to_string_lossy().contains("broken") {
                Err(format!("cannot decode {}", path.display()))
            } else {
                Ok(path.to_path_buf())
            }
        }
    }

    const STYLE: &str = "\
! close button
button.close.pixmap: close.xpm
button.close.pressed.b1.pixmap: close-b1.png
button.close.pressed.b1.color: #ff0000
button.maximize.toggled.focus.pixmap: /abs/restore.png
button.shade.hover.pixmap: broken.png
button.iconify.focus.color: #00ff00
not a resource
";

    #[test]
    fn test_parse_resources() {
        let resources = StyleResources::parse(STYLE, "/styles/plain");
        assert_eq!(resources.len(), 6);
        assert_eq!(resources.get("button.close.pixmap"), Some("close.xpm"));
        assert_eq!(
            resources.pixmap_path(ButtonKind::Close, ButtonVariant::PressedB1),
            Some(PathBuf::from("/styles/plain/close-b1.png"))
        );
        assert_eq!(
            resources.pixmap_path(ButtonKind::Maximize, ButtonVariant::ToggledFocus),
            Some(PathBuf::from("/abs/restore.png"))
        );
        assert_eq!(
            resources.background(ButtonKind::Close, ButtonVariant::PressedB1),
            Some(Color::rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_load_fills_slots() {
        let resources = StyleResources::parse(STYLE, "/styles/plain");
        let mut style = ButtonStyle::new();
        let report = style.load(&resources, &mut PathLoader);

        assert_eq!(report.loaded, 3);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].kind, ButtonKind::Shade);
        assert_eq!(report.failed[0].variant, ButtonVariant::Hover);

        let close = style.table(ButtonKind::Close);
        assert!(close.contains(ButtonVariant::Default));
        let pressed = close.get(ButtonVariant::PressedB1).unwrap();
        assert_eq!(pressed.background, Some(Color::rgb(255, 0, 0)));
        assert!(style.table(ButtonKind::Shade).is_empty());
        // A color without a pixmap does not create a slot.
        assert!(style.table(ButtonKind::Iconify).is_empty());
    }

    #[test]
    fn test_reload_drops_old_slots() {
        let mut style = ButtonStyle::new();
        style.load(&StyleResources::parse(STYLE, "/s"), &mut PathLoader);
        assert_eq!(style.len(), 3);

        let next = StyleResources::parse("button.menu.pixmap: menu.png\n", "/s");
        let report = style.reload(&next, &mut PathLoader);
        assert_eq!(report.loaded, 1);
        assert_eq!(style.len(), 1);
        assert!(style.table(ButtonKind::Close).is_empty());
    }

    #[test]
    fn test_resolve_through_style() {
        let mut style = ButtonStyle::new();
        style.load(&StyleResources::parse(STYLE, "/s"), &mut PathLoader);

        let state = ButtonState::new().with_hovered(true).with_focused(true);
        let slot = style.resolve(ButtonKind::Close, &state).unwrap();
        assert_eq!(slot.handle, PathBuf::from("/s/close.xpm"));
        assert_eq!(style.select(ButtonKind::Shade, &state), None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = StyleResources::load("/nonexistent/style");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
