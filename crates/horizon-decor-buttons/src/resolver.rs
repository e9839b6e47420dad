//! Picking the variant to draw for a button state.
//!
//! Resolution is a fixed chain of checks against the loaded variants. The
//! first loaded candidate wins:
//!
//! 1. toggled and pressed: the mouse-button specific variant, then `ToggledPressed`
//! 2. pressed: the mouse-button specific variant, then `Pressed`
//! 3. the hover/focus/unfocus variant for the state, degrading hover to the
//!    focus columns and unfocus to focus; a toggled button then tries the
//!    untoggled sibling of the last degraded variant
//! 4. disabled buttons stop here; everything else may use `Default`

use crate::state::{ButtonState, PointerButton};
use crate::table::{VariantSlot, VariantTable};
use crate::variant::ButtonVariant;

const HOVER: usize = 0;
const FOCUS: usize = HOVER + ButtonVariant::FOCUS_OFFSET;
const UNFOCUS: usize = HOVER + ButtonVariant::UNFOCUS_OFFSET;

/// Select the variant to draw, or `None` if the button should not be drawn.
pub fn select_variant<H>(state: &ButtonState, table: &VariantTable<H>) -> Option<ButtonVariant> {
    if !state.present {
        return None;
    }

    if let Some(variant) = pressed_variant(state, table) {
        return Some(variant);
    }
    if let Some(variant) = state_variant(state, table) {
        return Some(variant);
    }

    // A disabled button never borrows an enabled look.
    if !state.enabled {
        return None;
    }
    table
        .contains(ButtonVariant::Default)
        .then_some(ButtonVariant::Default)
}

/// Select the variant and return its slot.
pub fn resolve_variant<'a, H>(
    state: &ButtonState,
    table: &'a VariantTable<H>,
) -> Option<(ButtonVariant, &'a VariantSlot<H>)> {
    let variant = select_variant(state, table)?;
    table.get(variant).map(|slot| (variant, slot))
}

fn pressed_variant<H>(state: &ButtonState, table: &VariantTable<H>) -> Option<ButtonVariant> {
    let button = state.pressed?;
    let (toggled_specific, specific) = match button {
        PointerButton::Button1 => (ButtonVariant::ToggledPressedB1, ButtonVariant::PressedB1),
        PointerButton::Button2 => (ButtonVariant::ToggledPressedB2, ButtonVariant::PressedB2),
        PointerButton::Button3 => (ButtonVariant::ToggledPressedB3, ButtonVariant::PressedB3),
    };

    let toggled = [toggled_specific, ButtonVariant::ToggledPressed];
    let plain = [specific, ButtonVariant::Pressed];
    toggled
        .into_iter()
        .filter(|_| state.toggled)
        .chain(plain)
        .find(|variant| table.contains(*variant))
}

fn state_variant<H>(state: &ButtonState, table: &VariantTable<H>) -> Option<ButtonVariant> {
    // Column order encodes the hover and unfocus degradations.
    let columns: &[usize] = match (state.hovered, state.focused) {
        (true, true) => &[HOVER, FOCUS, UNFOCUS],
        (true, false) => &[HOVER, UNFOCUS, FOCUS],
        (false, true) => &[FOCUS],
        (false, false) => &[UNFOCUS, FOCUS],
    };

    let disabled = if state.enabled { 0 } else { ButtonVariant::DISABLED_OFFSET };
    let toggled_row = state.toggled.then_some(disabled + ButtonVariant::TOGGLED_OFFSET);

    let plain_columns = match (state.toggled, columns.split_last()) {
        (true, Some((last, _))) => std::slice::from_ref(last),
        _ => columns,
    };

    toggled_row
        .into_iter()
        .flat_map(|row| columns.iter().map(move |column| row + column))
        .chain(plain_columns.iter().map(|column| disabled + column))
        .filter_map(ButtonVariant::from_state_index)
        .find(|variant| table.contains(*variant))
}
