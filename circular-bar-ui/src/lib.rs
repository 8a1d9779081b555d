//! Core primitives for circular-bar widgets.
//!
//! This crate holds what a widget needs from its host and nothing else:
//!
//! - [`Dp`] and [`Px`] units with a global density [`dp::SCALE_FACTOR`]
//! - [`Color`]
//! - [`Constraint`] and [`DimensionValue`] for layout negotiation
//! - [`DrawCommand`] / [`DrawablePipeline`], the seam between widgets that
//!   describe paint operations and pipelines that execute them
//!
//! Widgets live in the `circular-bar` crate.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod constraint;
pub mod dp;
pub mod draw;
pub mod px;

pub use image;

pub use crate::{
    color::{Color, ColorParseError},
    constraint::{Constraint, DimensionValue},
    dp::Dp,
    draw::{DrawCommand, DrawContext, DrawablePipeline},
    px::{Px, PxRect, PxSize},
};
