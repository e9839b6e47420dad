//! Horizon Decor - asset resolution for window-manager decorations.
//!
//! This is the umbrella crate. It ties together:
//!
//! - [`icons`]: freedesktop icon theme lookup for window icons
//! - [`buttons`]: decoration button variants and their fallback order
//! - [`DecorConfig`]: TOML configuration of both
//! - [`Decorations`]: one facade owning the icon search, the loaded button
//!   style and the rasterization backend
//!
//! # Example
//!
//! ```ignore
//! use horizon_decor::prelude::*;
//!
//! let config = DecorConfig::load("/etc/horizon/decor.toml")?;
//! let mut decor = Decorations::new(config, my_backend)?;
//!
//! let icon = decor.window_icon(&["org.mozilla.firefox", "firefox"], 32);
//! let state = ButtonState::new().with_focused(true).with_hovered(true);
//! if let Some(slot) = decor.button(ButtonKind::Close, &state) {
//!     // draw slot.handle over slot.background
//! }
//! ```

pub mod backend;
pub mod config;
pub mod decorations;

#[cfg(feature = "hot-reload")]
pub mod hot_reload;

mod error;

pub use backend::{AssetBackend, BackendLoader};
pub use config::{DEFAULT_ICON_SIZE, DecorConfig};
pub use decorations::Decorations;
pub use error::{Error, Result};

#[cfg(feature = "hot-reload")]
pub use hot_reload::{ChangeKind, ConfigChangeEvent, ConfigWatcher, WatchedFile};

/// Icon theme lookup.
pub mod icons {
    pub use horizon_decor_icons::*;
}

/// Decoration button variants.
pub mod buttons {
    pub use horizon_decor_buttons::*;
}

/// Commonly used types.
pub mod prelude {
    pub use crate::{AssetBackend, DecorConfig, Decorations};
    pub use horizon_decor_buttons::{
        ButtonKind, ButtonState, ButtonVariant, Color, PointerButton, VariantSlot,
    };
    pub use horizon_decor_icons::{IconSearch, SearchContext};
}

/// Target names for log filtering.
pub mod targets {
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_decor::config";
    /// Facade target.
    pub const DECORATIONS: &str = "horizon_decor::decorations";
    /// File watching target.
    pub const HOT_RELOAD: &str = "horizon_decor::hot_reload";
}
