//! Button kinds and their named visual variants.

use std::fmt;
use std::str::FromStr;

/// A decoration button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Close the window.
    Close,
    /// Maximize or restore.
    Maximize,
    /// Minimize to the task bar.
    Iconify,
    /// Roll the window up into its title bar.
    Shade,
    /// Show the window on all desktops.
    Stick,
    /// Open the window menu.
    Menu,
}

impl ButtonKind {
    /// Number of button kinds.
    pub const COUNT: usize = 6;

    /// Every button kind.
    pub const ALL: [ButtonKind; Self::COUNT] = [
        ButtonKind::Close,
        ButtonKind::Maximize,
        ButtonKind::Iconify,
        ButtonKind::Shade,
        ButtonKind::Stick,
        ButtonKind::Menu,
    ];

    /// Name used in style resource keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Close => "close",
            ButtonKind::Maximize => "maximize",
            ButtonKind::Iconify => "iconify",
            ButtonKind::Shade => "shade",
            ButtonKind::Stick => "stick",
            ButtonKind::Menu => "menu",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ButtonKind {
    type Err = UnknownButtonKind;

    /// Parse a resource key name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownButtonKind(s.to_string()))
    }
}

/// A name that is not a button kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button kind '{0}'")]
pub struct UnknownButtonKind(pub String);

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pre-rendered look of a button.
///
/// The twelve unpressed variants are declared in row order: the `Hover`,
/// `Focus`, `Unfocus` columns, repeated for toggled (+3), disabled (+6) and
/// toggled-disabled (+9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Hover,
    Focus,
    Unfocus,
    ToggledHover,
    ToggledFocus,
    ToggledUnfocus,
    DisabledHover,
    DisabledFocus,
    DisabledUnfocus,
    ToggledDisabledHover,
    ToggledDisabledFocus,
    ToggledDisabledUnfocus,
    Pressed,
    PressedB1,
    PressedB2,
    PressedB3,
    ToggledPressed,
    ToggledPressedB1,
    ToggledPressedB2,
    ToggledPressedB3,
    /// Look used when nothing more specific is loaded.
    Default,
}

impl ButtonVariant {
    /// Number of variants.
    pub const COUNT: usize = 21;

    /// Every variant, in declaration order.
    pub const ALL: [ButtonVariant; Self::COUNT] = [
        ButtonVariant::Hover,
        ButtonVariant::Focus,
        ButtonVariant::Unfocus,
        ButtonVariant::ToggledHover,
        ButtonVariant::ToggledFocus,
        ButtonVariant::ToggledUnfocus,
        ButtonVariant::DisabledHover,
        ButtonVariant::DisabledFocus,
        ButtonVariant::DisabledUnfocus,
        ButtonVariant::ToggledDisabledHover,
        ButtonVariant::ToggledDisabledFocus,
        ButtonVariant::ToggledDisabledUnfocus,
        ButtonVariant::Pressed,
        ButtonVariant::PressedB1,
        ButtonVariant::PressedB2,
        ButtonVariant::PressedB3,
        ButtonVariant::ToggledPressed,
        ButtonVariant::ToggledPressedB1,
        ButtonVariant::ToggledPressedB2,
        ButtonVariant::ToggledPressedB3,
        ButtonVariant::Default,
    ];

    /// Offset of the `Focus` column from `Hover`.
    pub const FOCUS_OFFSET: usize = 1;
    /// Offset of the `Unfocus` column from `Hover`.
    pub const UNFOCUS_OFFSET: usize = 2;
    /// Offset of the toggled row.
    pub const TOGGLED_OFFSET: usize = 3;
    /// Offset of the disabled rows.
    pub const DISABLED_OFFSET: usize = 6;

    /// Unpressed variant at `index` in row order (0..12).
    pub fn from_state_index(index: usize) -> Option<Self> {
        (index < 12).then(|| Self::ALL[index])
    }

    /// Resource key suffix, e.g. `toggled.pressed.b1`. `Default` has none.
    pub fn suffix(&self) -> Option<&'static str> {
        let suffix = match self {
            ButtonVariant::Default => return None,
            ButtonVariant::Pressed => "pressed",
            ButtonVariant::PressedB1 => "pressed.b1",
            ButtonVariant::PressedB2 => "pressed.b2",
            ButtonVariant::PressedB3 => "pressed.b3",
            ButtonVariant::ToggledPressed => "toggled.pressed",
            ButtonVariant::ToggledPressedB1 => "toggled.pressed.b1",
            ButtonVariant::ToggledPressedB2 => "toggled.pressed.b2",
            ButtonVariant::ToggledPressedB3 => "toggled.pressed.b3",
            ButtonVariant::Hover => "hover",
            ButtonVariant::Focus => "focus",
            ButtonVariant::Unfocus => "unfocus",
            ButtonVariant::ToggledHover => "toggled.hover",
            ButtonVariant::ToggledFocus => "toggled.focus",
            ButtonVariant::ToggledUnfocus => "toggled.unfocus",
            ButtonVariant::DisabledHover => "disabled.hover",
            ButtonVariant::DisabledFocus => "disabled.focus",
            ButtonVariant::DisabledUnfocus => "disabled.unfocus",
            ButtonVariant::ToggledDisabledHover => "toggled.disabled.hover",
            ButtonVariant::ToggledDisabledFocus => "toggled.disabled.focus",
            ButtonVariant::ToggledDisabledUnfocus => "toggled.disabled.unfocus",
        };
        Some(suffix)
    }

    /// Style resource key for `property` of this variant on `kind`, e.g.
    /// `button.close.pressed.b1.pixmap`.
    pub fn resource_key(&self, kind: ButtonKind, property: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("button.{}.{}.{}", kind.as_str(), suffix, property),
            None => format!("button.{}.{}", kind.as_str(), property),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
