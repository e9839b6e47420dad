//! Interaction state of a button at draw time.

/// Mouse button holding a decoration button down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button.
    Button1,
    /// Middle button.
    Button2,
    /// Secondary button.
    Button3,
}

/// Everything about a button that affects which variant is drawn.
///
/// Computed from scratch on every draw; nothing here is remembered between
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonState {
    /// The button applies to this window at all.
    pub present: bool,
    /// The button's action is currently permitted.
    pub enabled: bool,
    /// Logical on state (maximized, shaded, sticky).
    pub toggled: bool,
    /// Mouse button currently pressing this button.
    pub pressed: Option<PointerButton>,
    /// The pointer is over the button.
    pub hovered: bool,
    /// The window is the active one.
    pub focused: bool,
}

impl ButtonState {
    /// A present, enabled, idle button on an unfocused window.
    pub fn new() -> Self {
        Self {
            present: true,
            enabled: true,
            toggled: false,
            pressed: None,
            hovered: false,
            focused: false,
        }
    }

    /// Set whether the button applies to the window.
    pub fn with_present(mut self, present: bool) -> Self {
        self.present = present;
        self
    }

    /// Set whether the action is permitted.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the toggled state.
    pub fn with_toggled(mut self, toggled: bool) -> Self {
        self.toggled = toggled;
        self
    }

    /// Set the pressing mouse button.
    pub fn with_pressed(mut self, button: PointerButton) -> Self {
        self.pressed = Some(button);
        self
    }

    /// Set the hover state.
    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Set the window focus state.
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}
