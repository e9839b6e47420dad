//! Icon theme names from GTK settings files.
//!
//! Two formats are read: the legacy `~/.gtkrc-2.0` (`key = "value"` lines)
//! and GTK 3's `settings.ini` (`[Settings]` section).

use std::fs;
use std::path::Path;

use ini::Ini;

use crate::{Error, Result};

/// Setting that names the icon theme in both formats.
pub const ICON_THEME_KEY: &str = "gtk-icon-theme-name";

/// Read `gtk-icon-theme-name` from a gtkrc file. The last assignment wins.
pub fn icon_theme_from_gtkrc(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(parse_gtkrc(&content))
}

fn parse_gtkrc(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| key.trim() == ICON_THEME_KEY)
        .map(|(_, value)| unquote(value.trim()).to_string())
        .filter(|value| !value.is_empty())
        .last()
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}

/// Read `gtk-icon-theme-name` from the `[Settings]` section of a GTK 3
/// `settings.ini`.
pub fn icon_theme_from_settings_ini(path: &Path) -> Result<Option<String>> {
    let conf = Ini::load_from_file(path).map_err(|e| Error::settings(path, e.to_string()))?;
    Ok(conf
        .section(Some("Settings"))
        .and_then(|section| section.get(ICON_THEME_KEY))
        .map(|value| unquote(value.trim()).to_string())
        .filter(|value| !value.is_empty()))
}
