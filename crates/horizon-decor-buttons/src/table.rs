//! Per-button tables of loaded variants.

use crate::color::Color;
use crate::variant::ButtonVariant;

/// A loaded variant: backend pixel data plus an optional background.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSlot<H> {
    /// Opaque handle owned by the rasterization backend.
    pub handle: H,
    /// Background drawn behind the pixmap, if the style sets one.
    pub background: Option<Color>,
}

impl<H> VariantSlot<H> {
    /// Create a slot without a background override.
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            background: None,
        }
    }

    /// Set the background override.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

/// All loaded variants of one button. An empty slot means "not loaded".
#[derive(Debug, Clone)]
pub struct VariantTable<H> {
    slots: [Option<VariantSlot<H>>; ButtonVariant::COUNT],
}

impl<H> VariantTable<H> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Get a loaded variant.
    pub fn get(&self, variant: ButtonVariant) -> Option<&VariantSlot<H>> {
        self.slots[variant.index()].as_ref()
    }

    /// Check if a variant is loaded.
    pub fn contains(&self, variant: ButtonVariant) -> bool {
        self.slots[variant.index()].is_some()
    }

    /// Store a variant, returning the one it replaces.
    pub fn insert(&mut self, variant: ButtonVariant, slot: VariantSlot<H>) -> Option<VariantSlot<H>> {
        self.slots[variant.index()].replace(slot)
    }

    /// Remove a variant.
    pub fn remove(&mut self, variant: ButtonVariant) -> Option<VariantSlot<H>> {
        self.slots[variant.index()].take()
    }

    /// Drop every loaded variant.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Number of loaded variants.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loaded variants in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonVariant, &VariantSlot<H>)> {
        ButtonVariant::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(variant, slot)| slot.as_ref().map(|s| (variant, s)))
    }
}

impl<H> Default for VariantTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> FromIterator<(ButtonVariant, VariantSlot<H>)> for VariantTable<H> {
    fn from_iter<I: IntoIterator<Item = (ButtonVariant, VariantSlot<H>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (variant, slot) in iter {
            table.insert(variant, slot);
        }
        table
    }
}
