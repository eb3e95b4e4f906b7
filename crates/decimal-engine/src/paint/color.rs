/// sRGB color with straight (non-premultiplied) alpha.
///
/// Straight alpha matches what SVG paint attributes expect: a hex color plus
/// a separate opacity.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0.0 }
    }

    /// Opaque color from sRGB bytes.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: f32::from(a) / 255.0 }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Same color with its opacity multiplied by `opacity`.
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { a: (self.a * opacity).clamp(0.0, 1.0), ..self }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }

    /// `#rrggbb`, without alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Color::from_hex(0x7c9cff);
        assert_eq!((c.r, c.g, c.b, c.a), (0x7c, 0x9c, 0xff, 1.0));
        assert_eq!(c.to_hex(), "#7c9cff");
    }

    #[test]
    fn opacity_multiplies_and_clamps() {
        let c = Color::rgb(1, 2, 3).with_opacity(0.5).with_opacity(0.5);
        assert_eq!(c.a, 0.25);
        assert_eq!(Color::rgb(0, 0, 0).with_opacity(4.0).a, 1.0);
        assert!(Color::transparent().is_transparent());
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 255).a, 1.0);
    }
}
