//! Arc bounding boxes for the circular bar.
//!
//! Each arc is stroked along the circle inscribed in a square. The square is
//! centered in the padded rectangle, its side is the smaller padded extent,
//! and it is inset by half the arc's stroke width so the whole stroke stays
//! inside the padded area.

use circular_bar_ui::PxRect;
use glam::Vec2;

use crate::sweep::ProgressSweep;

/// An axis-aligned rectangle in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcBounds {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl ArcBounds {
    /// Creates bounds from their four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Radius of the inscribed circle.
    pub fn radius(&self) -> f32 {
        self.width().min(self.height()).max(0.0) * 0.5
    }
}

/// Everything needed to stroke both arcs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Bounds of the reached arc.
    pub reached_rect: ArcBounds,
    /// Bounds of the unreached arc.
    pub unreached_rect: ArcBounds,
    /// Start of the reached arc, 270° (12 o'clock).
    pub reached_start: f32,
    /// Extent of the reached arc.
    pub reached_sweep: f32,
    /// Start of the unreached arc.
    pub unreached_start: f32,
    /// Extent of the unreached arc.
    pub unreached_sweep: f32,
}

/// Returns the square, centered in `padded`, whose inscribed circle carries a
/// stroke of `stroke_width` without spilling outside `padded`.
///
/// A stroke wider than the available square collapses the bounds to its
/// center point.
pub fn arc_bounds(padded: PxRect, stroke_width: f32) -> ArcBounds {
    let width = padded.width.to_f32().max(0.0);
    let height = padded.height.to_f32().max(0.0);
    let center_x = padded.x.to_f32() + width * 0.5;
    let center_y = padded.y.to_f32() + height * 0.5;
    let half_side = (width.min(height) * 0.5 - stroke_width.max(0.0) * 0.5).max(0.0);
    ArcBounds::new(
        center_x - half_side,
        center_y - half_side,
        center_x + half_side,
        center_y + half_side,
    )
}

/// Computes both arcs' bounds and angles.
///
/// `progress` is clamped into `[0, max]`; a non-positive `max` yields an
/// empty reached arc.
///
/// ```
/// use circular_bar::geometry::compute_geometry;
/// use circular_bar_ui::{Px, PxRect};
///
/// let padded = PxRect::new(Px(0), Px(0), Px(100), Px(100));
/// let geometry = compute_geometry(25, 100, padded, 4.0, 2.0);
/// assert_eq!(geometry.reached_sweep, 90.0);
/// assert_eq!(geometry.reached_rect.left, 2.0);
/// assert_eq!(geometry.unreached_rect.left, 1.0);
/// ```
pub fn compute_geometry(
    progress: i32,
    max: i32,
    padded: PxRect,
    reached_stroke_width: f32,
    unreached_stroke_width: f32,
) -> ArcGeometry {
    let sweep = ProgressSweep::new(progress, max);
    ArcGeometry {
        reached_rect: arc_bounds(padded, reached_stroke_width),
        unreached_rect: arc_bounds(padded, unreached_stroke_width),
        reached_start: sweep.reached_start,
        reached_sweep: sweep.reached_sweep,
        unreached_start: sweep.unreached_start,
        unreached_sweep: sweep.unreached_sweep,
    }
}
