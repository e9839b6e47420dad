//! Decoration button variants for Horizon Decor.
//!
//! Every decoration button (close, maximize, shade, ...) can have up to
//! twenty-one pre-rendered looks. This crate stores the looks a style
//! provides and picks the one to draw for the button's current state:
//!
//! - [`ButtonVariant`]: the named looks and their style resource keys
//! - [`ButtonState`]: pressed/hovered/focused/toggled/enabled flags
//! - [`select_variant`]: the fallback chain from state to loaded look
//! - [`ButtonStyle`]: per-button tables, loaded through a [`VariantLoader`]
//!
//! # Example
//!
//! ```ignore
//! use horizon_decor_buttons::{ButtonKind, ButtonState, ButtonStyle, PointerButton, StyleResources};
//!
//! let resources = StyleResources::load("/usr/share/horizon/styles/plain/style")?;
//! let mut style = ButtonStyle::new();
//! style.load(&resources, &mut backend);
//!
//! let state = ButtonState::new().with_focused(true).with_pressed(PointerButton::Button1);
//! if let Some(slot) = style.resolve(ButtonKind::Close, &state) {
//!     backend.draw(&slot.handle, slot.background);
//! }
//! ```

pub mod color;
pub mod resolver;
pub mod state;
pub mod style;
pub mod table;
pub mod variant;

mod error;

pub use color::Color;
pub use error::{Error, Result};
pub use resolver::{resolve_variant, select_variant};
pub use state::{ButtonState, PointerButton};
pub use style::{ButtonStyle, LoadFailure, LoadReport, StyleResources, VariantLoader};
pub use table::{VariantSlot, VariantTable};
pub use variant::{ButtonKind, ButtonVariant, UnknownButtonKind};

/// Target names for log filtering.
pub mod targets {
    /// Style loading target.
    pub const STYLE: &str = "horizon_decor_buttons::style";
}
