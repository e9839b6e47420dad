//! Icon theme lookup for Horizon Decor.
//!
//! This crate finds the icon file a window decoration should show, following
//! the freedesktop.org icon theme specification:
//!
//! - **Parsing**: `index.theme` files become [`ThemeDescriptor`]s
//! - **Registry**: every scanned theme, with replace-by-name semantics
//! - **Inheritance**: `Inherits=` chains are scanned and searched, with cycles cut
//! - **Resolution**: exact size matches first, then the closest size, then
//!   `hicolor`, then plain pixmap directories
//!
//! # Example
//!
//! ```ignore
//! use horizon_decor_icons::IconSearch;
//!
//! let search = IconSearch::from_env();
//!
//! // Window class, then instance name, then a generic icon.
//! let icon = search.resolve(&["org.mozilla.firefox", "firefox", "application-x-executable"], 32);
//! ```

pub mod context;
pub mod gtk;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod types;

mod error;

pub use context::{Environment, SearchContext, SearchContextBuilder, default_extensions};
pub use error::{Error, Result};
pub use parser::{parse_index, parse_index_str};
pub use registry::{SharedThemeRegistry, ThemeRegistry};
pub use resolver::IconSearch;
pub use types::{
    DiagnosticKind, DirectoryType, HICOLOR, IconDirectory, ThemeDescriptor, ThemeDiagnostic,
};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// `index.theme` parsing target.
    pub const PARSER: &str = "horizon_decor_icons::parser";
    /// Theme registry and rescans target.
    pub const REGISTRY: &str = "horizon_decor_icons::registry";
    /// Search context and environment target.
    pub const CONTEXT: &str = "horizon_decor_icons::context";
    /// Icon resolution target.
    pub const RESOLVER: &str = "horizon_decor_icons::resolver";
}
