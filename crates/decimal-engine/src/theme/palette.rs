use crate::paint::Color;

use super::Theme;

/// Named colors a theme provides to the clock face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub bg_primary: Color,
    pub bg_elevated: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    /// Halo drawn around accent strokes.
    pub accent_glow: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg_primary: Color::from_hex(0x0b0d12),
                bg_elevated: Color::from_hex(0x161a22),
                text_primary: Color::from_hex(0xf2f4f8),
                text_secondary: Color::from_hex(0xa9b1c1),
                text_muted: Color::from_hex(0x6b7385),
                accent: Color::from_hex(0x7c9cff),
                accent_glow: Color::from_hex(0x7c9cff).with_opacity(0.45),
                border: Color::from_hex(0x2a3040),
            },
            Theme::Light => Self {
                bg_primary: Color::from_hex(0xf6f7fb),
                bg_elevated: Color::from_hex(0xffffff),
                text_primary: Color::from_hex(0x12151c),
                text_secondary: Color::from_hex(0x4a5263),
                text_muted: Color::from_hex(0x8a92a3),
                accent: Color::from_hex(0x3b5bdb),
                accent_glow: Color::from_hex(0x3b5bdb).with_opacity(0.35),
                border: Color::from_hex(0xd5d9e2),
            },
            Theme::Sunset => Self {
                bg_primary: Color::from_hex(0x1d1020),
                bg_elevated: Color::from_hex(0x2a1630),
                text_primary: Color::from_hex(0xfff1e6),
                text_secondary: Color::from_hex(0xf3c6a5),
                text_muted: Color::from_hex(0xb08a8f),
                accent: Color::from_hex(0xff7a45),
                accent_glow: Color::from_hex(0xff7a45).with_opacity(0.45),
                border: Color::from_hex(0x4a2a3f),
            },
            Theme::Ocean => Self {
                bg_primary: Color::from_hex(0x061a26),
                bg_elevated: Color::from_hex(0x0c2636),
                text_primary: Color::from_hex(0xe6f6ff),
                text_secondary: Color::from_hex(0x9cc9dd),
                text_muted: Color::from_hex(0x5f8aa0),
                accent: Color::from_hex(0x2ec4d6),
                accent_glow: Color::from_hex(0x2ec4d6).with_opacity(0.45),
                border: Color::from_hex(0x173b4f),
            },
        }
    }
}
