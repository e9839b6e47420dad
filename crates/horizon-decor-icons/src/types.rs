//! Core types for the icon theme system.
//!
//! This module provides the parsed form of a theme's `index.theme` file:
//! - [`ThemeDescriptor`]: one theme and its ordered icon directories
//! - [`IconDirectory`]: one sized subdirectory and its match policy
//! - [`ThemeDiagnostic`]: non-fatal problems found while parsing

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the theme every lookup falls back to.
pub const HICOLOR: &str = "hicolor";

/// Default `Threshold` for directories that do not declare one.
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Size policy of an icon directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryType {
    /// Icons must be used at exactly the nominal size.
    Fixed,
    /// Icons may be scaled anywhere within `[MinSize, MaxSize]`.
    Scaled,
    /// Icons may be used within `Threshold` pixels of the nominal size.
    #[default]
    Threshold,
}

impl DirectoryType {
    /// Parse a `Type=` value. Returns `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fixed" => Some(Self::Fixed),
            "Scalable" | "Scaled" => Some(Self::Scaled),
            "Threshold" => Some(Self::Threshold),
            _ => None,
        }
    }

    /// The canonical `index.theme` spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Scaled => "Scalable",
            Self::Threshold => "Threshold",
        }
    }
}

/// One subdirectory of an icon theme.
///
/// Zero values for `threshold`, `min_size` and `max_size` mean "not declared";
/// the accessors below always return the effective value, and
/// [`normalize`](Self::normalize) writes the defaults back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDirectory {
    /// Directory path relative to the theme root, e.g. `48x48/apps`.
    pub name: String,
    /// Nominal icon size.
    pub size: u32,
    /// Scale factor (1 for normal, 2 for HiDPI, etc.)
    pub scale: u32,
    /// Free-form `Context=` value.
    pub context: Option<String>,
    /// `Type=` value as written in the index file.
    pub type_name: Option<String>,
    /// Effective size policy.
    pub kind: DirectoryType,
    /// Declared `MinSize`, zero if absent.
    pub min_size: u32,
    /// Declared `MaxSize`, zero if absent.
    pub max_size: u32,
    /// Declared `Threshold`, zero if absent.
    pub threshold: u32,
}

impl IconDirectory {
    /// Create a directory entry with nothing declared yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            scale: 1,
            context: None,
            type_name: None,
            kind: DirectoryType::Threshold,
            min_size: 0,
            max_size: 0,
            threshold: 0,
        }
    }

    /// Builder-style helper for a directory of the given type and size.
    pub fn with_type(mut self, kind: DirectoryType, size: u32) -> Self {
        self.kind = kind;
        self.type_name = Some(kind.as_str().to_string());
        self.size = size;
        self
    }

    /// Set the declared size range.
    pub fn with_range(mut self, min_size: u32, max_size: u32) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the declared threshold.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Effective threshold.
    pub fn threshold(&self) -> u32 {
        if self.threshold == 0 {
            DEFAULT_THRESHOLD
        } else {
            self.threshold
        }
    }

    /// Effective minimum size.
    pub fn min_size(&self) -> u32 {
        if self.min_size == 0 { self.size } else { self.min_size }
    }

    /// Effective maximum size.
    pub fn max_size(&self) -> u32 {
        if self.max_size == 0 { self.size } else { self.max_size }
    }

    /// Apply defaults in place.
    ///
    /// Returns `false` if the declared `Type` was not recognized and had to be
    /// coerced to [`DirectoryType::Threshold`]. Calling this again is a no-op.
    pub fn normalize(&mut self) -> bool {
        let recognized = match self.type_name.as_deref() {
            None => {
                self.kind = DirectoryType::Threshold;
                true
            }
            Some(value) => match DirectoryType::parse(value) {
                Some(kind) => {
                    self.kind = kind;
                    true
                }
                None => {
                    self.kind = DirectoryType::Threshold;
                    false
                }
            },
        };
        self.threshold = self.threshold();
        self.min_size = self.min_size();
        self.max_size = self.max_size();
        recognized
    }

    /// Check if this directory can serve icons at `size` without rescaling
    /// beyond what the theme allows.
    pub fn matches_size(&self, size: u32) -> bool {
        match self.kind {
            DirectoryType::Fixed => self.size == size,
            DirectoryType::Scaled => self.min_size() <= size && size <= self.max_size(),
            DirectoryType::Threshold => self.size.abs_diff(size) <= self.threshold(),
        }
    }

    /// Distance between `size` and what this directory offers.
    ///
    /// For `Threshold` directories the in-range test uses `size ± threshold`
    /// while the out-of-range distance is measured against `MinSize`/`MaxSize`,
    /// exactly as the freedesktop reference lookup does.
    pub fn size_distance(&self, size: u32) -> u32 {
        match self.kind {
            DirectoryType::Fixed => self.size.abs_diff(size),
            DirectoryType::Scaled => {
                if size < self.min_size() {
                    self.min_size() - size
                } else if size > self.max_size() {
                    size - self.max_size()
                } else {
                    0
                }
            }
            DirectoryType::Threshold => {
                let threshold = self.threshold();
                if size < self.size.saturating_sub(threshold) {
                    self.min_size().abs_diff(size)
                } else if size > self.size.saturating_add(threshold) {
                    size.abs_diff(self.max_size())
                } else {
                    0
                }
            }
        }
    }
}

/// A non-fatal problem found while parsing an index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDiagnostic {
    /// 1-indexed line, if the problem is tied to one.
    pub line: Option<usize>,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

/// Kinds of index file diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A second `[Icon Theme]` section was ignored.
    DuplicateThemeSection,
    /// A section that is neither declared nor present on disk.
    UnknownSection(String),
    /// A key that is not recognized in its section.
    UnknownKey { section: String, key: String },
    /// A numeric key with a value that does not parse.
    InvalidValue { key: String, value: String },
    /// A line that is neither a section header nor `key=value`.
    MalformedLine(String),
    /// A key line before any section header.
    KeyOutsideSection(String),
    /// A `Type=` value that was coerced to `Threshold`.
    UnknownType { directory: String, value: String },
    /// A directory without a usable `Size`.
    ZeroSize { directory: String },
    /// A directory listed in `Directories` that does not exist on disk.
    MissingDirectory { directory: String },
}

impl fmt::Display for ThemeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        match &self.kind {
            DiagnosticKind::DuplicateThemeSection => {
                write!(f, "duplicate [Icon Theme] section ignored")
            }
            DiagnosticKind::UnknownSection(name) => write!(f, "unknown section [{}]", name),
            DiagnosticKind::UnknownKey { section, key } => {
                write!(f, "unknown key '{}' in [{}]", key, section)
            }
            DiagnosticKind::InvalidValue { key, value } => {
                write!(f, "invalid value '{}' for {}", value, key)
            }
            DiagnosticKind::MalformedLine(line) => write!(f, "malformed line '{}'", line),
            DiagnosticKind::KeyOutsideSection(key) => {
                write!(f, "key '{}' outside of a recognized section", key)
            }
            DiagnosticKind::UnknownType { directory, value } => {
                write!(f, "unknown Type '{}' in [{}], using Threshold", value, directory)
            }
            DiagnosticKind::ZeroSize { directory } => write!(f, "[{}] has no Size", directory),
            DiagnosticKind::MissingDirectory { directory } => {
                write!(f, "declared directory '{}' does not exist", directory)
            }
        }
    }
}

/// A parsed icon theme.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    /// Internal theme name (the theme's directory name).
    pub name: String,
    /// Path of the `index.theme` this descriptor was parsed from.
    pub index_path: PathBuf,
    /// Human-readable `Name=` value.
    pub display_name: Option<String>,
    /// Parent theme to search when a lookup fails here.
    pub inherits: Option<String>,
    /// `Directories=` as `,a,b,` for substring membership tests.
    pub directory_list: String,
    /// `ScaledDirectories=` as `,a,b,`.
    pub scaled_directory_list: String,
    /// Icon directories in search order (reverse of declaration order).
    pub directories: Vec<IconDirectory>,
    /// Problems found while parsing.
    pub diagnostics: Vec<ThemeDiagnostic>,
}

impl ThemeDescriptor {
    /// Create an empty descriptor.
    pub fn new(name: impl Into<String>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            index_path: index_path.into(),
            display_name: None,
            inherits: None,
            directory_list: String::new(),
            scaled_directory_list: String::new(),
            directories: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Directory holding the index file.
    pub fn root(&self) -> &Path {
        self.index_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// `Name=` if present, otherwise the internal name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Check whether `Directories` or `ScaledDirectories` lists `directory`.
    pub fn declares_directory(&self, directory: &str) -> bool {
        if directory.is_empty() || directory.contains(',') {
            return false;
        }
        let needle = format!(",{},", directory);
        self.directory_list.contains(&needle) || self.scaled_directory_list.contains(&needle)
    }

    /// Names listed in `Directories` followed by `ScaledDirectories`.
    pub fn declared_directories(&self) -> impl Iterator<Item = &str> {
        self.directory_list
            .split(',')
            .chain(self.scaled_directory_list.split(','))
            .filter(|s| !s.is_empty())
    }

    /// Parent theme that still needs scanning, i.e. not this theme and not
    /// `hicolor`.
    pub fn scan_parent(&self) -> Option<&str> {
        self.inherits
            .as_deref()
            .filter(|parent| *parent != self.name && *parent != HICOLOR)
    }

    /// Add a directory in front of the search order.
    pub fn prepend_directory(&mut self, directory: IconDirectory) {
        self.directories.insert(0, directory);
    }
}

/// Store `value` as a comma-bracketed list: `a, b` becomes `,a,b,`.
pub(crate) fn bracket_list(value: &str) -> String {
    let mut out = String::from(",");
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        out.push_str(item);
        out.push(',');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_type_parse() {
        assert_eq!(DirectoryType::parse("Fixed"), Some(DirectoryType::Fixed));
        assert_eq!(DirectoryType::parse("Scalable"), Some(DirectoryType::Scaled));
        assert_eq!(DirectoryType::parse("Scaled"), Some(DirectoryType::Scaled));
        assert_eq!(DirectoryType::parse("Threshold"), Some(DirectoryType::Threshold));
        assert_eq!(DirectoryType::parse("fixed"), None);
        assert_eq!(DirectoryType::default(), DirectoryType::Threshold);
    }

    #[test]
    fn test_fixed_matches_only_exact() {
        for size in [8, 16, 22, 48, 256] {
            let dir = IconDirectory::new("d").with_type(DirectoryType::Fixed, size);
            assert!(dir.matches_size(size));
            assert!(!dir.matches_size(size + 1));
        }
        let dir = IconDirectory::new("d").with_type(DirectoryType::Fixed, 16);
        assert_eq!(dir.size_distance(20), 4);
        assert_eq!(dir.size_distance(10), 6);
    }

    #[test]
    fn test_scaled_range() {
        let dir = IconDirectory::new("scalable/apps")
            .with_type(DirectoryType::Scaled, 24)
            .with_range(16, 32);

        assert!(dir.matches_size(16));
        assert!(dir.matches_size(24));
        assert!(dir.matches_size(32));
        assert!(!dir.matches_size(15));
        assert!(!dir.matches_size(33));

        assert_eq!(dir.size_distance(10), 6);
        assert_eq!(dir.size_distance(40), 8);
        assert_eq!(dir.size_distance(20), 0);
    }

    #[test]
    fn test_threshold_defaults() {
        let mut dir = IconDirectory::new("48x48/apps");
        dir.size = 48;
        assert!(dir.normalize());

        assert_eq!(dir.threshold, 2);
        assert_eq!(dir.min_size, 48);
        assert_eq!(dir.max_size, 48);
        for size in 46..=50 {
            assert!(dir.matches_size(size), "size {} should match", size);
        }
        assert!(!dir.matches_size(45));
        assert!(!dir.matches_size(51));
    }

    #[test]
    fn test_threshold_accessors_without_normalize() {
        let dir = IconDirectory::new("48x48/apps").with_type(DirectoryType::Threshold, 48);
        assert_eq!(dir.threshold(), 2);
        assert!(dir.matches_size(50));
        assert!(!dir.matches_size(51));
    }

    #[test]
    fn test_threshold_distance_uses_min_max() {
        let dir = IconDirectory::new("32x32/apps")
            .with_type(DirectoryType::Threshold, 32)
            .with_range(24, 40)
            .with_threshold(2);

        assert_eq!(dir.size_distance(31), 0);
        // Below 30: measured against MinSize, not 32 - 2.
        assert_eq!(dir.size_distance(20), 4);
        // Above 34: measured against MaxSize.
        assert_eq!(dir.size_distance(50), 10);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut dir = IconDirectory::new("x");
        dir.size = 22;
        dir.type_name = Some("Bogus".to_string());

        assert!(!dir.normalize());
        let once = dir.clone();
        dir.normalize();
        assert_eq!(dir, once);
        assert_eq!(dir.kind, DirectoryType::Threshold);
    }

    #[test]
    fn test_bracket_list() {
        assert_eq!(bracket_list("16x16/apps, 32x32/apps"), ",16x16/apps,32x32/apps,");
        assert_eq!(bracket_list(""), ",");
    }

    #[test]
    fn test_declares_directory() {
        let mut theme = ThemeDescriptor::new("Foo", "/icons/Foo/index.theme");
        theme.directory_list = bracket_list("16x16/apps,32x32/apps");
        theme.scaled_directory_list = bracket_list("16x16@2/apps");

        assert!(theme.declares_directory("16x16/apps"));
        assert!(theme.declares_directory("16x16@2/apps"));
        assert!(!theme.declares_directory("16x16"));
        assert!(!theme.declares_directory(""));
        assert_eq!(theme.root(), Path::new("/icons/Foo"));
        assert_eq!(theme.display_name(), "Foo");
    }

    #[test]
    fn test_scan_parent() {
        let mut theme = ThemeDescriptor::new("Foo", "/x/index.theme");
        assert_eq!(theme.scan_parent(), None);
        theme.inherits = Some("Foo".to_string());
        assert_eq!(theme.scan_parent(), None);
        theme.inherits = Some(HICOLOR.to_string());
        assert_eq!(theme.scan_parent(), None);
        theme.inherits = Some("Bar".to_string());
        assert_eq!(theme.scan_parent(), Some("Bar"));
    }
}
