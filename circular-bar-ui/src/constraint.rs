//! # Layout Constraints
//!
//! A parent hands each widget a [`Constraint`] describing how much room it
//! may take along each axis. A widget may also carry its own sizing
//! preference, which is combined with the parent's through
//! [`Constraint::merge`] before the widget resolves its final size.
//!
//! ## Dimension Types
//!
//! - `Fixed(px)`: exactly `px`, whatever the content wants.
//! - `Wrap { min, max }`: as large as the content, within optional bounds.
//! - `Fill { min, max }`: as large as the available space, within optional
//!   bounds.
//!
//! ## Merge Rules
//!
//! - A fixed child always wins.
//! - A wrapping child keeps its own minimum and is capped by whatever maximum
//!   the parent offers.
//! - A filling child adopts the parent's available size as its maximum.
//!
//! ```
//! use circular_bar_ui::{Constraint, DimensionValue, Px};
//!
//! let parent = Constraint::new(
//!     DimensionValue::Fixed(Px(200)),
//!     DimensionValue::Fixed(Px(200)),
//! );
//! let child = Constraint::new(
//!     DimensionValue::Fill { min: Some(Px(50)), max: None },
//!     DimensionValue::Fill { min: Some(Px(50)), max: None },
//! );
//!
//! let merged = child.merge(&parent);
//! assert_eq!(merged.width, DimensionValue::Fill {
//!     min: Some(Px(50)),
//!     max: Some(Px(200))
//! });
//! ```

use crate::Px;

/// How a single dimension (width or height) is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    /// Exactly this many pixels.
    Fixed(Px),
    /// Size to content, optionally bounded.
    Wrap {
        /// Lower bound
        min: Option<Px>,
        /// Upper bound
        max: Option<Px>,
    },
    /// Take the available space, optionally bounded.
    Fill {
        /// Lower bound
        min: Option<Px>,
        /// Upper bound
        max: Option<Px>,
    },
}

impl DimensionValue {
    /// Fill with no bounds.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Wrap with no bounds.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Returns the upper bound, if any.
    pub fn get_max(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { max, .. } => *max,
            DimensionValue::Fill { max, .. } => *max,
        }
    }

    /// Resolves this dimension to a concrete size given the size the content
    /// would like to take.
    ///
    /// `Fixed` ignores the content. `Wrap` clamps the content into its
    /// bounds. `Fill` takes its maximum when it has one and otherwise falls
    /// back to the clamped content size.
    ///
    /// ```
    /// use circular_bar_ui::{DimensionValue, Px};
    ///
    /// let wrap = DimensionValue::Wrap { min: None, max: Some(Px(30)) };
    /// assert_eq!(wrap.resolve(Px(40)), Px(30));
    /// assert_eq!(DimensionValue::Fixed(Px(12)).resolve(Px(40)), Px(12));
    /// ```
    pub fn resolve(&self, content: Px) -> Px {
        let clamp = |min: Option<Px>, max: Option<Px>| {
            let mut value = content;
            if let Some(max) = max {
                value = value.min(max);
            }
            if let Some(min) = min {
                value = value.max(min);
            }
            value
        };
        match *self {
            DimensionValue::Fixed(value) => value,
            DimensionValue::Wrap { min, max } => clamp(min, max),
            DimensionValue::Fill { min, max } => match max {
                Some(max) => min.map_or(max, |min| max.max(min)),
                None => clamp(min, None),
            },
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        DimensionValue::WRAP
    }
}

/// Width and height sizing rules for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraint {
    /// Horizontal rule
    pub width: DimensionValue,
    /// Vertical rule
    pub height: DimensionValue,
}

impl Constraint {
    /// No preference on either axis.
    pub const NONE: Self = Self {
        width: DimensionValue::WRAP,
        height: DimensionValue::WRAP,
    };

    /// Creates a new constraint.
    pub fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// Combines this (child) constraint with the parent's.
    pub fn merge(&self, parent_constraint: &Constraint) -> Self {
        let new_width = Self::merge_dimension(self.width, parent_constraint.width);
        let new_height = Self::merge_dimension(self.height, parent_constraint.height);
        Constraint::new(new_width, new_height)
    }

    fn merge_dimension(child_dim: DimensionValue, parent_dim: DimensionValue) -> DimensionValue {
        let tighter = |a: Option<Px>, b: Option<Px>| match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, None) => a,
            (None, b) => b,
        };
        match child_dim {
            DimensionValue::Fixed(cv) => DimensionValue::Fixed(cv),
            DimensionValue::Wrap {
                min: c_min,
                max: c_max,
            } => DimensionValue::Wrap {
                min: c_min,
                max: tighter(c_max, parent_dim.get_max()),
            },
            DimensionValue::Fill {
                min: c_min,
                max: c_max,
            } => {
                let parent_min = match parent_dim {
                    DimensionValue::Fixed(_) => None,
                    DimensionValue::Wrap { min, .. } => min,
                    DimensionValue::Fill { min, .. } => min,
                };
                let min = match (c_min, parent_min) {
                    (Some(c), Some(p)) => Some(c.max(p)),
                    (c, None) => c,
                    (None, p) => p,
                };
                let max = tighter(c_max, parent_dim.get_max());
                match (min, max) {
                    (Some(min), Some(max)) if min > max => DimensionValue::Fill {
                        min: Some(max),
                        max: Some(max),
                    },
                    _ => DimensionValue::Fill { min, max },
                }
            }
        }
    }
}
