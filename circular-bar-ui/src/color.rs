//! RGBA colors.
//!
//! [`Color`] stores straight (non-premultiplied) components as `f32` in
//! `[0.0, 1.0]`. Widgets that persist colors use the packed `0xAARRGGBB`
//! form from [`Color::to_argb_u32`] / [`Color::from_argb_u32`].

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Error returned by [`Color::parse_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string did not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The string had a digit count other than 6 (`#RRGGBB`) or 8 (`#AARRGGBB`).
    #[error("color `{0}` must have 6 or 8 hex digits")]
    InvalidLength(String),
    /// The string contained a non-hex character.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// A color with an alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red, `0.0..=1.0`
    pub r: f32,
    /// Green, `0.0..=1.0`
    pub g: f32,
    /// Blue, `0.0..=1.0`
    pub b: f32,
    /// Alpha, `0.0..=1.0`
    pub a: f32,
}

impl Color {
    /// Opaque red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Unpacks a `0xAARRGGBB` integer.
    ///
    /// ```
    /// use circular_bar_ui::Color;
    ///
    /// let color = Color::from_argb_u32(0xFF_AE_D0_36);
    /// assert_eq!(color.to_rgba8(), [0xAE, 0xD0, 0x36, 0xFF]);
    /// ```
    pub fn from_argb_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Packs the color into a `0xAARRGGBB` integer.
    pub fn to_argb_u32(self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    ///
    /// ```
    /// use circular_bar_ui::Color;
    ///
    /// let color = Color::parse_hex("#aed036")?;
    /// assert_eq!(color.to_argb_u32(), 0xFFAED036);
    /// # Ok::<(), circular_bar_ui::ColorParseError>(())
    /// ```
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_owned()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.to_owned()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_owned()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(hex.to_owned()))?;
        if digits.len() == 6 {
            Ok(Self::from_argb_u32(0xFF00_0000 | value))
        } else {
            Ok(Self::from_argb_u32(value))
        }
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Quantizes the color to `[r, g, b, a]` bytes, clamping each channel.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}
