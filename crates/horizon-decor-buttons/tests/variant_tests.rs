//! Button variant fallback tests.

use horizon_decor_buttons::{
    ButtonState, ButtonVariant, PointerButton, VariantSlot, VariantTable, select_variant,
};

fn table(variants: &[ButtonVariant]) -> VariantTable<&'static str> {
    variants
        .iter()
        .map(|v| (*v, VariantSlot::new("pixmap")))
        .collect()
}

fn select(variants: &[ButtonVariant], state: ButtonState) -> Option<ButtonVariant> {
    select_variant(&state, &table(variants))
}

#[test]
fn test_disabled_uses_disabled_sibling_before_default() {
    let state = ButtonState::new()
        .with_enabled(false)
        .with_hovered(true)
        .with_focused(true);

    assert_eq!(
        select(&[ButtonVariant::Default, ButtonVariant::DisabledUnfocus], state),
        Some(ButtonVariant::DisabledUnfocus)
    );
}

#[test]
fn test_disabled_never_falls_back_to_default() {
    let state = ButtonState::new().with_enabled(false).with_focused(true);
    assert_eq!(
        select(&[ButtonVariant::Default, ButtonVariant::Focus], state),
        None
    );
}

#[test]
fn test_generic_pressed_when_specific_missing() {
    let state = ButtonState::new().with_pressed(PointerButton::Button2);
    assert_eq!(
        select(&[ButtonVariant::Pressed, ButtonVariant::PressedB1], state),
        Some(ButtonVariant::Pressed)
    );
}

#[test]
fn test_specific_pressed_preferred() {
    let loaded = [
        ButtonVariant::Pressed,
        ButtonVariant::PressedB1,
        ButtonVariant::PressedB2,
        ButtonVariant::PressedB3,
    ];
    let cases = [
        (PointerButton::Button1, ButtonVariant::PressedB1),
        (PointerButton::Button2, ButtonVariant::PressedB2),
        (PointerButton::Button3, ButtonVariant::PressedB3),
    ];
    for (button, expected) in cases {
        let state = ButtonState::new().with_pressed(button);
        assert_eq!(select(&loaded, state), Some(expected));
    }
}

#[test]
fn test_toggled_pressed_order() {
    let state = ButtonState::new()
        .with_toggled(true)
        .with_pressed(PointerButton::Button3);

    let all = ButtonVariant::ALL;
    assert_eq!(select(&all, state), Some(ButtonVariant::ToggledPressedB3));

    let generic_toggled = [
        ButtonVariant::ToggledPressed,
        ButtonVariant::PressedB3,
        ButtonVariant::Pressed,
    ];
    assert_eq!(
        select(&generic_toggled, state),
        Some(ButtonVariant::ToggledPressed)
    );

    let untoggled_only = [ButtonVariant::PressedB3, ButtonVariant::Pressed];
    assert_eq!(select(&untoggled_only, state), Some(ButtonVariant::PressedB3));
}

#[test]
fn test_pressed_without_pressed_variants_uses_state() {
    let state = ButtonState::new()
        .with_pressed(PointerButton::Button1)
        .with_hovered(true);
    assert_eq!(
        select(&[ButtonVariant::Hover, ButtonVariant::Default], state),
        Some(ButtonVariant::Hover)
    );
}

#[test]
fn test_hover_degrades_to_focus_state() {
    let focused = ButtonState::new().with_hovered(true).with_focused(true);
    assert_eq!(
        select(&[ButtonVariant::Focus, ButtonVariant::Unfocus], focused),
        Some(ButtonVariant::Focus)
    );

    let unfocused = ButtonState::new().with_hovered(true);
    assert_eq!(
        select(&[ButtonVariant::Focus, ButtonVariant::Unfocus], unfocused),
        Some(ButtonVariant::Unfocus)
    );
    assert_eq!(
        select(&[ButtonVariant::Focus], unfocused),
        Some(ButtonVariant::Focus)
    );
}

#[test]
fn test_unfocus_degrades_to_focus() {
    let state = ButtonState::new();
    assert_eq!(
        select(&[ButtonVariant::Focus, ButtonVariant::Default], state),
        Some(ButtonVariant::Focus)
    );
}

#[test]
fn test_focus_does_not_use_unfocus() {
    let state = ButtonState::new().with_focused(true);
    assert_eq!(
        select(&[ButtonVariant::Unfocus, ButtonVariant::Default], state),
        Some(ButtonVariant::Default)
    );
}

#[test]
fn test_toggled_degrades_to_untoggled() {
    let state = ButtonState::new().with_toggled(true).with_focused(true);
    assert_eq!(
        select(&[ButtonVariant::Focus, ButtonVariant::Default], state),
        Some(ButtonVariant::Focus)
    );

    let disabled = state.with_enabled(false);
    assert_eq!(
        select(&[ButtonVariant::DisabledFocus], disabled),
        Some(ButtonVariant::DisabledFocus)
    );
    assert_eq!(select(&[ButtonVariant::Focus], disabled), None);
}

#[test]
fn test_default_as_last_resort() {
    let state = ButtonState::new().with_hovered(true).with_toggled(true);
    assert_eq!(
        select(&[ButtonVariant::Default, ButtonVariant::DisabledHover], state),
        Some(ButtonVariant::Default)
    );
    assert_eq!(select(&[ButtonVariant::DisabledHover], state), None);
}

#[test]
fn test_resolution_is_deterministic() {
    let loaded = [
        ButtonVariant::Hover,
        ButtonVariant::ToggledUnfocus,
        ButtonVariant::Default,
    ];
    let state = ButtonState::new().with_toggled(true);
    let first = select(&loaded, state);
    for _ in 0..10 {
        assert_eq!(select(&loaded, state), first);
    }
    assert_eq!(first, Some(ButtonVariant::ToggledUnfocus));
}

#[test]
fn test_toggled_uses_untoggled_sibling_of_last_degraded_slot() {
    let state = ButtonState::new().with_toggled(true).with_hovered(true);
    assert_eq!(
        select(&[ButtonVariant::Hover, ButtonVariant::Focus], state),
        Some(ButtonVariant::Focus)
    );
    assert_eq!(
        select(&[ButtonVariant::Hover, ButtonVariant::Default], state),
        Some(ButtonVariant::Default)
    );
}

#[test]
fn test_toggled_hover_does_not_use_untoggled_hover() {
    let state = ButtonState::new()
        .with_toggled(true)
        .with_hovered(true)
        .with_focused(true);
    assert_eq!(select(&[ButtonVariant::Hover], state), None);
    assert_eq!(
        select(&[ButtonVariant::Hover, ButtonVariant::Unfocus], state),
        Some(ButtonVariant::Unfocus)
    );
}
