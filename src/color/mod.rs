//! RGBW color value type and pure transforms.

mod transform;

use core::str::FromStr;

use thiserror::Error;

pub use transform::{PASTEL_BLEND, SOFTEN_BLEND};

/// A single LED color with red, green, blue and white-intensity channels.
///
/// Equality is exact per-channel equality. The wire protocol and all
/// palette math use this four-channel representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

/// Error returned when a color spec string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color spec {0:?}")]
pub struct ParseColorError(pub String);

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from an RGB triple; white defaults to 0.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, w: 0 }
    }

    pub const fn from_rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Create a color from a u32 value (0xRRGGBB format)
    pub const fn from_u32(color: u32) -> Self {
        Self {
            r: ((color >> 16) & 0xFF) as u8,
            g: ((color >> 8) & 0xFF) as u8,
            b: (color & 0xFF) as u8,
            w: 0,
        }
    }

    /// Channels in wire order: r, g, b, w.
    pub const fn to_rgbw(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.w]
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `#rrggbb` or bare `rrggbb` hex, case insensitive.
    ///
    /// Named colors are resolved by the caller before reaching this crate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ParseColorError(s.to_string()))?;
        Ok(Self::from_u32(value))
    }
}
