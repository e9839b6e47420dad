//! Background colors for button variants.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` or X11 `rgb:rr/gg/bb`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return match hex.len() {
                3 => {
                    let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                    Some(Self::rgb(channels.next()??, channels.next()??, channels.next()??))
                }
                6 => Some(Self::rgb(
                    u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
                    u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
                    u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
                )),
                _ => None,
            };
        }

        let rgb = value.strip_prefix("rgb:")?;
        let mut parts = rgb.split('/').map(|p| u8::from_str_radix(p, 16).ok());
        let color = Self::rgb(parts.next()??, parts.next()??, parts.next()??);
        parts.next().is_none().then_some(color)
    }
}
