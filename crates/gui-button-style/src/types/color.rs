//! Colors used by button decorations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An 8-bit RGBA color.
///
/// Colors compare structurally, so two resolved decorations built from the
/// same theme are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color names understood by the host document engine.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("grey", Color::GREY),
    ("gray", Color::GREY),
    ("light grey", Color::LIGHT_GREY),
    ("light gray", Color::LIGHT_GREY),
    ("pastel grey", Color::PASTEL_GREY),
    ("pastel gray", Color::PASTEL_GREY),
    ("dark grey", Color::DARK_GREY),
    ("dark gray", Color::DARK_GREY),
    ("red", Color::from_rgb8(0xFF, 0x00, 0x00)),
    ("green", Color::from_rgb8(0x00, 0xFF, 0x00)),
    ("blue", Color::from_rgb8(0x00, 0x00, 0xFF)),
    ("transparent", Color::TRANSPARENT),
];

impl Color {
    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xFF)
    }

    /// Create a color from a hex string (e.g., "#6060c0" or "#6060c0ff").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            0xFF
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Look up a named color. Names are case-insensitive and whitespace-normalized.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, color)| *color)
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const GREY: Self = Self::from_rgb8(0x80, 0x80, 0x80);
    pub const LIGHT_GREY: Self = Self::from_rgb8(0xC0, 0xC0, 0xC0);
    pub const PASTEL_GREY: Self = Self::from_rgb8(0xDF, 0xDF, 0xDF);
    pub const DARK_GREY: Self = Self::from_rgb8(0x40, 0x40, 0x40);
    /// Accent used by the hover and pressed contours.
    pub const ACCENT_BLUE: Self = Self::from_rgb8(0x60, 0x60, 0xC0);
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else {
            Self::from_name(trimmed)
        }
        .ok_or_else(|| Error::invalid_color(s))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
