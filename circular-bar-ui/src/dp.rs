//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for sizes that should look the same
//! physical size on every screen density.
//!
//! ## Scale Factor
//!
//! The conversion between dp and physical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. Hosts set it once at startup with
//! [`set_scale_factor`]; until then it reads as `1.0`.
//!
//! ## Usage
//!
//! ```
//! use circular_bar_ui::{Dp, Px};
//!
//! let diameter = Dp(40.0);
//! assert_eq!(diameter.to_px(), Px(40));
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::Px;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// The value is how many physical pixels correspond to one dp:
/// - `1.0`: 1 dp = 1 pixel (baseline density)
/// - `2.0`: 1 dp = 2 pixels (high density)
/// - `0.75`: 1 dp = 0.75 pixels (low density)
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global dp scale factor.
///
/// Non-finite or non-positive factors are ignored and the previous value is
/// kept.
pub fn set_scale_factor(scale_factor: f64) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        tracing::warn!("Ignoring invalid scale factor {scale_factor}");
        return;
    }
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(scale_factor));
    *lock.write() = scale_factor;
}

/// Returns the current global dp scale factor, `1.0` when unset.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` and is converted to physical pixels through the
/// global [`SCALE_FACTOR`] whenever a pixel-exact value is required.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Converts this dp value to physical pixels, rounded half-up onto the
    /// pixel grid the way stroke dimensions are resolved.
    ///
    /// ```
    /// use circular_bar_ui::Dp;
    ///
    /// // With the default scale factor of 1.0: 1.5 + 0.5
    /// assert_eq!(Dp(1.5).to_rounded_pixels_f32(), 2.0);
    /// ```
    pub fn to_rounded_pixels_f32(&self) -> f32 {
        self.to_pixels_f32() + 0.5
    }

    /// Converts this `Dp` value to a [`Px`] value, truncating toward zero.
    pub fn to_px(&self) -> Px {
        Px::from_f32(self.to_pixels_f32())
    }
}
