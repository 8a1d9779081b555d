//! Physical pixel coordinate system.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel value, negative values allowed
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - An axis-aligned rectangle (position plus size)
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use circular_bar_ui::px::{Px, PxRect, PxSize};
//!
//! let size = PxSize::new(Px(200), Px(120));
//! let rect = PxRect::from_size(size).inset(Px(10), Px(10), Px(10), Px(10));
//! assert_eq!(rect.width, Px(180));
//! assert_eq!(rect.height, Px(100));
//! ```

/// A physical pixel coordinate value.
///
/// Physical pixels correspond directly to target pixels. Unlike
/// density-independent pixels ([`Dp`](crate::Dp)) they are never scaled.
/// Arithmetic saturates at the `i32` bounds.
///
/// ```
/// use circular_bar_ui::px::Px;
///
/// let max_px = Px(i32::MAX);
/// assert_eq!(max_px.saturating_add(Px(1)), max_px);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the value as a u32, or zero if negative.
    ///
    /// ```
    /// use circular_bar_ui::px::Px;
    ///
    /// assert_eq!(Px(10).positive(), 10);
    /// assert_eq!(Px(-5).positive(), 0);
    /// ```
    pub fn positive(self) -> u32 {
        if self.0 < 0 { 0 } else { self.0 as u32 }
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, truncating toward zero.
    pub fn from_f32(value: f32) -> Self {
        Px(value as i32)
    }

    /// Computes `self + rhs`, saturating at the numeric bounds.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Computes `self - rhs`, saturating at the numeric bounds.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// A zero-sized area.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// Left edge
    pub x: Px,
    /// Top edge
    pub y: Px,
    /// Width, never negative for rectangles built by this module
    pub width: Px,
    /// Height, never negative for rectangles built by this module
    pub height: Px,
}

impl PxRect {
    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at the origin.
    pub fn from_size(size: PxSize) -> Self {
        Self::new(Px::ZERO, Px::ZERO, size.width, size.height)
    }

    /// Shrinks the rectangle by the given amount on each side.
    ///
    /// Width and height saturate at zero when the insets exceed the extent.
    pub fn inset(&self, left: Px, top: Px, right: Px, bottom: Px) -> Self {
        let width = self.width.saturating_sub(left).saturating_sub(right);
        let height = self.height.saturating_sub(top).saturating_sub(bottom);
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: width.max(Px::ZERO),
            height: height.max(Px::ZERO),
        }
    }

    /// Returns `true` if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width.0 <= 0 || self.height.0 <= 0
    }
}
