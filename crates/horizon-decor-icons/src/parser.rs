//! `index.theme` parsing.
//!
//! The parser walks the file once, line by line, tracking whether it is
//! outside any recognized section, inside `[Icon Theme]`, or inside an icon
//! directory section. Problems are recorded as [`ThemeDiagnostic`]s and never
//! stop the parse; only an unreadable file is an error.

use std::fs;
use std::path::Path;

use crate::targets;
use crate::types::{
    DiagnosticKind, IconDirectory, ThemeDescriptor, ThemeDiagnostic, bracket_list,
};
use crate::{Error, Result};

/// Name of the header section of every index file.
const ICON_THEME_SECTION: &str = "Icon Theme";

/// Where the parser currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Before any section, or inside a rejected one.
    Outside,
    /// Inside `[Icon Theme]`.
    IconTheme,
    /// Inside the directory section at the front of the directory list.
    Directory,
}

/// Keys recognized inside a directory section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectoryKey {
    Size,
    Scale,
    Context,
    Type,
    MinSize,
    MaxSize,
    Threshold,
    Extension,
}

impl DirectoryKey {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "Size" => Some(Self::Size),
            "Scale" => Some(Self::Scale),
            "Context" => Some(Self::Context),
            "Type" => Some(Self::Type),
            "Threshold" => Some(Self::Threshold),
            _ if key.eq_ignore_ascii_case("MinSize") => Some(Self::MinSize),
            _ if key.eq_ignore_ascii_case("MaxSize") => Some(Self::MaxSize),
            _ if key.starts_with("X-") => Some(Self::Extension),
            _ => None,
        }
    }
}

/// Parse the index file of theme `name` located at `index_path`.
///
/// Fails only if the file cannot be read.
pub fn parse_index(name: &str, index_path: &Path) -> Result<ThemeDescriptor> {
    let bytes = fs::read(index_path).map_err(|e| Error::io(index_path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_index_str(name, index_path, &content))
}

/// Parse index file `content` as if it had been read from `index_path`.
///
/// `index_path` is still used to check whether section names exist as
/// subdirectories next to the index file.
pub fn parse_index_str(name: &str, index_path: &Path, content: &str) -> ThemeDescriptor {
    let mut parser = Parser {
        theme: ThemeDescriptor::new(name, index_path),
        cursor: Cursor::Outside,
        section: String::new(),
        seen_theme_section: false,
    };

    for (idx, raw) in content.lines().enumerate() {
        parser.line(idx + 1, raw);
    }
    parser.finish()
}

struct Parser {
    theme: ThemeDescriptor,
    cursor: Cursor,
    section: String,
    seen_theme_section: bool,
}

impl Parser {
    fn diagnose(&mut self, line: Option<usize>, kind: DiagnosticKind) {
        let diagnostic = ThemeDiagnostic { line, kind };
        tracing::warn!(
            target: targets::PARSER,
            theme = %self.theme.name,
            path = %self.theme.index_path.display(),
            "{}",
            diagnostic
        );
        self.theme.diagnostics.push(diagnostic);
    }

    fn line(&mut self, line: usize, raw: &str) {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') || text.starts_with(';') {
            return;
        }

        if let Some(header) = text.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            self.section(line, header.trim());
            return;
        }

        let Some((key, value)) = text.split_once('=') else {
            self.diagnose(Some(line), DiagnosticKind::MalformedLine(text.to_string()));
            return;
        };
        let key = key.trim();
        let value = value.trim();

        match self.cursor {
            Cursor::Outside => {
                // Keys of rejected sections were already reported with the
                // section header.
                if self.section.is_empty() {
                    self.diagnose(Some(line), DiagnosticKind::KeyOutsideSection(key.to_string()));
                }
            }
            Cursor::IconTheme => self.theme_key(key, value),
            Cursor::Directory => self.directory_key(line, key, value),
        }
    }

    fn section(&mut self, line: usize, name: &str) {
        self.section = name.to_string();

        if name == ICON_THEME_SECTION {
            if self.seen_theme_section {
                self.cursor = Cursor::Outside;
                self.diagnose(Some(line), DiagnosticKind::DuplicateThemeSection);
            } else {
                self.seen_theme_section = true;
                self.cursor = Cursor::IconTheme;
            }
            return;
        }

        if self.theme.declares_directory(name) || self.theme.root().join(name).is_dir() {
            self.theme.prepend_directory(IconDirectory::new(name));
            self.cursor = Cursor::Directory;
        } else {
            self.cursor = Cursor::Outside;
            self.diagnose(Some(line), DiagnosticKind::UnknownSection(name.to_string()));
        }
    }

    fn theme_key(&mut self, key: &str, value: &str) {
        match key {
            "Inherits" => {
                self.theme.inherits = value
                    .split(',')
                    .map(str::trim)
                    .find(|s| !s.is_empty())
                    .map(str::to_string);
            }
            "Directories" => self.theme.directory_list = bracket_list(value),
            "ScaledDirectories" => self.theme.scaled_directory_list = bracket_list(value),
            "Name" => self.theme.display_name = Some(value.to_string()),
            _ => {}
        }
    }

    fn directory_key(&mut self, line: usize, key: &str, value: &str) {
        let Some(parsed) = DirectoryKey::parse(key) else {
            let section = self.section.clone();
            self.diagnose(
                Some(line),
                DiagnosticKind::UnknownKey {
                    section,
                    key: key.to_string(),
                },
            );
            return;
        };

        let number = || value.parse::<u32>().ok();
        let invalid = DiagnosticKind::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        let Some(dir) = self.theme.directories.first_mut() else {
            return;
        };
        let ok = match parsed {
            DirectoryKey::Size => number().map(|n| dir.size = n).is_some(),
            DirectoryKey::Scale => number().map(|n| dir.scale = n).is_some(),
            DirectoryKey::MinSize => number().map(|n| dir.min_size = n).is_some(),
            DirectoryKey::MaxSize => number().map(|n| dir.max_size = n).is_some(),
            DirectoryKey::Threshold => number().map(|n| dir.threshold = n).is_some(),
            DirectoryKey::Context => {
                dir.context = Some(value.to_string());
                true
            }
            DirectoryKey::Type => {
                dir.type_name = Some(value.to_string());
                true
            }
            DirectoryKey::Extension => true,
        };
        if !ok {
            self.diagnose(Some(line), invalid);
        }
    }

    fn finish(mut self) -> ThemeDescriptor {
        let mut found = Vec::new();
        for dir in &mut self.theme.directories {
            if !dir.normalize() {
                found.push(DiagnosticKind::UnknownType {
                    directory: dir.name.clone(),
                    value: dir.type_name.clone().unwrap_or_default(),
                });
            }
            if dir.size == 0 {
                found.push(DiagnosticKind::ZeroSize {
                    directory: dir.name.clone(),
                });
            }
        }

        let root = self.theme.root().to_path_buf();
        for declared in self.theme.declared_directories() {
            if !root.join(declared).is_dir() {
                found.push(DiagnosticKind::MissingDirectory {
                    directory: declared.to_string(),
                });
            }
        }

        for kind in found {
            self.diagnose(None, kind);
        }

        tracing::debug!(
            target: targets::PARSER,
            theme = %self.theme.name,
            directories = self.theme.directories.len(),
            inherits = ?self.theme.inherits,
            "parsed icon theme"
        );
        self.theme
    }
}
