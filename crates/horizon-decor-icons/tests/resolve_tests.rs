//! Icon resolution tests against theme trees built on disk.

use std::fs;
use std::path::{Path, PathBuf};

use horizon_decor_icons::{IconSearch, SearchContext, ThemeRegistry};
use tempfile::TempDir;

/// A temporary set of icon roots.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn root(&self, root: &str) -> PathBuf {
        self.dir.path().join(root)
    }

    fn theme(&self, root: &str, theme: &str, index: &str) {
        let dir = self.root(root).join(theme);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.theme"), index).unwrap();
    }

    fn icon(&self, root: &str, theme: &str, subdir: &str, file: &str) -> PathBuf {
        let dir = self.root(root).join(theme).join(subdir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        fs::write(&path, b"icon").unwrap();
        path
    }

    fn pixmap(&self, file: &str) -> PathBuf {
        let dir = self.root("pixmaps");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(file);
        fs::write(&path, b"pixmap").unwrap();
        path
    }

    fn search(&self, theme: &str) -> IconSearch {
        let context = SearchContext::builder()
            .theme(theme)
            .base_root(self.root("user"))
            .base_root(self.root("system"))
            .append_dir(self.root("pixmaps"))
            .extensions(["png", "svg", "xpm"])
            .build();
        let search = IconSearch::new(context);
        search.rescan();
        search
    }
}

fn fixed_dirs_index(inherits: Option<&str>, sizes: &[u32]) -> String {
    let names: Vec<String> = sizes.iter().map(|s| format!("{s}x{s}")).collect();
    let mut index = String::from("[Icon Theme]\nName=Test\n");
    if let Some(parent) = inherits {
        index.push_str(&format!("Inherits={parent}\n"));
    }
    index.push_str(&format!("Directories={}\n\n", names.join(",")));
    for (name, size) in names.iter().zip(sizes) {
        index.push_str(&format!("[{name}]\nSize={size}\nType=Fixed\n\n"));
    }
    index
}

#[test]
fn test_resolves_through_inheritance_before_hicolor() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(Some("Bar"), &[16]));
    fx.theme("system", "Bar", &fixed_dirs_index(None, &[16]));
    fx.theme("system", "hicolor", &fixed_dirs_index(None, &[16]));
    fx.icon("system", "Foo", "16x16", "other.png");
    let in_bar = fx.icon("system", "Bar", "16x16", "x.png");
    fx.icon("system", "hicolor", "16x16", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), Some(in_bar));
}

#[test]
fn test_exact_pass_completes_before_distance_pass() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16, 48]));
    fx.icon("system", "Foo", "48x48", "a.png");
    let b = fx.icon("system", "Foo", "16x16", "b.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["a", "b"], 16), Some(b));
}

#[test]
fn test_distance_pass_picks_closest() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16, 32, 64]));
    fx.icon("system", "Foo", "16x16", "x.png");
    let large = fx.icon("system", "Foo", "64x64", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 48), Some(large));
}

#[test]
fn test_distance_tie_uses_directory_order() {
    let fx = Fixture::new();
    // Declared 16 then 48, so 48 is searched first.
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16, 48]));
    fx.icon("system", "Foo", "16x16", "x.png");
    let later = fx.icon("system", "Foo", "48x48", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 32), Some(later));
}

#[test]
fn test_threshold_directory_matches_nearby_size() {
    let fx = Fixture::new();
    fx.theme(
        "system",
        "Foo",
        "[Icon Theme]\nDirectories=48x48,16x16\n\n[48x48]\nSize=48\n\n[16x16]\nSize=16\nType=Fixed\n",
    );
    let near = fx.icon("system", "Foo", "48x48", "x.png");
    fx.icon("system", "Foo", "16x16", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 50), Some(near));
}

#[test]
fn test_hicolor_fallback() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16]));
    fx.theme("system", "hicolor", &fixed_dirs_index(None, &[16]));
    let path = fx.icon("system", "hicolor", "16x16", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), Some(path));
}

#[test]
fn test_unknown_theme_falls_back_to_hicolor() {
    let fx = Fixture::new();
    fx.theme("system", "hicolor", &fixed_dirs_index(None, &[16]));
    let path = fx.icon("system", "hicolor", "16x16", "x.png");

    let search = fx.search("DoesNotExist");
    assert_eq!(search.resolve(&["x"], 16), Some(path));
    assert_eq!(search.theme_display_name(), None);
}

#[test]
fn test_plain_fallback_lowercases_file_name() {
    let fx = Fixture::new();
    let path = fx.pixmap("xterm.xpm");

    let search = fx.search("hicolor");
    assert_eq!(search.resolve(&["XTerm"], 16), Some(path));
    assert_eq!(search.resolve(&["rxvt"], 16), None);
}

#[test]
fn test_plain_fallback_after_themes() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16]));
    fx.pixmap("x.png");
    let themed = fx.icon("system", "Foo", "16x16", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), Some(themed));
}

#[test]
fn test_extension_preference() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16]));
    let png = fx.icon("system", "Foo", "16x16", "x.png");
    let svg = fx.icon("system", "Foo", "16x16", "x.svg");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), Some(png));
    assert_eq!(search.resolve_with_extensions(&["x"], 16, &["svg", "png"]), Some(svg));
}

#[test]
fn test_inheritance_cycle_terminates() {
    let fx = Fixture::new();
    fx.theme("system", "A", &fixed_dirs_index(Some("B"), &[16]));
    fx.theme("system", "B", &fixed_dirs_index(Some("A"), &[16]));

    let search = fx.search("A");
    assert!(search.registry().contains("A"));
    assert!(search.registry().contains("B"));
    assert_eq!(search.resolve(&["missing"], 16), None);
}

#[test]
fn test_rescan_pulls_in_ancestors() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(Some("Bar"), &[16]));
    fx.theme("system", "Bar", &fixed_dirs_index(Some("Baz"), &[16]));
    fx.theme("system", "Baz", &fixed_dirs_index(None, &[16]));
    fx.theme("system", "Unrelated", &fixed_dirs_index(None, &[16]));

    let search = fx.search("Foo");
    let registry = search.registry();
    assert!(registry.contains("Foo"));
    assert!(registry.contains("Bar"));
    assert!(registry.contains("Baz"));
    assert!(!registry.contains("Unrelated"));
}

#[test]
fn test_highest_priority_root_wins() {
    let fx = Fixture::new();
    fx.theme("user", "Foo", "[Icon Theme]\nName=User Foo\n");
    fx.theme("system", "Foo", "[Icon Theme]\nName=System Foo\n");

    let search = fx.search("Foo");
    assert_eq!(search.theme_display_name().as_deref(), Some("User Foo"));
    assert_eq!(
        search.theme_path(),
        Some(fx.root("user").join("Foo").join("index.theme"))
    );
}

#[test]
fn test_icons_found_under_any_root() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16]));
    let user_copy = fx.icon("user", "Foo", "16x16", "x.png");
    fx.icon("system", "Foo", "16x16", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), Some(user_copy));
}

#[test]
fn test_duplicate_sections_round_trip() {
    let fx = Fixture::new();
    fx.theme(
        "system",
        "Foo",
        "[Icon Theme]\nDirectories=16x16,32x32\n\n\
         [16x16]\nSize=16\nContext=first\n\n\
         [32x32]\nSize=32\n\n\
         [16x16]\nSize=16\nContext=second\n",
    );

    let search = fx.search("Foo");
    let registry = search.registry();
    let theme = registry.lookup("Foo").unwrap();
    let sixteen: Vec<_> = theme
        .directories
        .iter()
        .filter(|d| d.name == "16x16")
        .collect();
    assert_eq!(sixteen.len(), 2);
    assert_eq!(theme.directories[0].context.as_deref(), Some("second"));
}

#[test]
fn test_undeclared_directory_on_disk_is_accepted() {
    let fx = Fixture::new();
    fx.theme(
        "system",
        "Foo",
        "[Icon Theme]\nDirectories=\n\n[extra]\nSize=24\nType=Fixed\n",
    );
    let path = fx.icon("system", "Foo", "extra", "x.png");

    let search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 24), Some(path));
}

#[test]
fn test_rescan_replaces_registry() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", "[Icon Theme]\nName=Before\n");
    let search = fx.search("Foo");
    let before = search.registry();

    fx.theme("system", "Foo", "[Icon Theme]\nName=After\n");
    search.rescan();

    assert_eq!(before.lookup("Foo").unwrap().display_name(), "Before");
    assert_eq!(search.theme_display_name().as_deref(), Some("After"));
}

#[test]
fn test_set_theme_then_rescan() {
    let fx = Fixture::new();
    fx.theme("system", "Foo", &fixed_dirs_index(None, &[16]));
    fx.theme("system", "Bar", &fixed_dirs_index(None, &[16]));
    let bar_icon = fx.icon("system", "Bar", "16x16", "x.png");

    let mut search = fx.search("Foo");
    assert_eq!(search.resolve(&["x"], 16), None);

    search.set_theme("Bar");
    search.rescan();
    assert_eq!(search.resolve(&["x"], 16), Some(bar_icon));
}

#[test]
fn test_scan_ignores_missing_roots() {
    let context = SearchContext::builder()
        .theme("Foo")
        .base_root(Path::new("/nonexistent/icons"))
        .build();
    let registry = ThemeRegistry::scan(&context);
    assert!(registry.is_empty());
}
