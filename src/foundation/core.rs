use crate::foundation::error::{ImporterError, ImporterResult};
use crate::foundation::math::{round_channel, unorm8_to_f32};

pub use kurbo::Vec2;

/// Straight (non-premultiplied) RGBA color with channels in `[0, 1]`.
///
/// Serialized as a `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque red, the default pivot marker.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Build a color from float channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels.
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self {
            r: unorm8_to_f32(px[0]),
            g: unorm8_to_f32(px[1]),
            b: unorm8_to_f32(px[2]),
            a: unorm8_to_f32(px[3]),
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> ImporterResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ImporterError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let mut px = [0u8, 0, 0, 255];
        for (idx, slot) in px.iter_mut().enumerate().take(hex.len() / 2) {
            let byte = hex
                .get(idx * 2..idx * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ImporterError::validation(format!("invalid hex color '{s}'")))?;
            *slot = byte;
        }
        Ok(Self::from_rgba8(px))
    }

    /// Channel-wise equality after rounding each channel to 4 decimal digits.
    pub fn approx_eq(self, other: Self) -> bool {
        round_channel(self.r) == round_channel(other.r)
            && round_channel(self.g) == round_channel(other.g)
            && round_channel(self.b) == round_channel(other.b)
            && round_channel(self.a) == round_channel(other.a)
    }

    /// `true` when alpha is exactly zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Axis-aligned rectangle in pixel space.
///
/// `y` is measured from the bottom edge of the image; `(0, 0)` is the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SliceRect {
    /// Left edge.
    pub x: u32,
    /// Bottom edge, counted from the bottom of the image.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SliceRect {
    /// Build a rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole `width x height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// `true` when the rectangle lies entirely inside a `width x height` image.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }

    /// Number of pixels covered.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Nine-slice border insets in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Border {
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
    /// Top inset.
    pub top: f32,
}

/// Integer pixel coordinate inside a scanned buffer (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelPos {
    /// Column.
    pub x: u32,
    /// Row, in the buffer's native order (row 0 is the top row).
    pub y: u32,
}

impl PixelPos {
    /// Build a position.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Normalize against a `width x height` region into unit coordinates.
    pub fn to_fraction(self, width: u32, height: u32) -> Vec2 {
        Vec2::new(
            f64::from(self.x) / f64::from(width.max(1)),
            f64::from(self.y) / f64::from(height.max(1)),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
