//! A circular progress bar widget.
//!
//! The bar is drawn as two concentric arcs: the reached arc, starting at
//! 12 o'clock and running clockwise for `progress / max` of a full turn, and
//! the unreached arc, covering the rest of the circle.
//!
//! # Usage
//!
//! Create a bar, give it a size, then either take its draw commands for
//! your own pipeline or let it paint itself.
//!
//! ```
//! use circular_bar::{CircularBar, CircularBarArgs, RasterConfig};
//! use circular_bar_ui::{Color, Constraint};
//!
//! let mut bar = CircularBar::new(
//!     CircularBarArgs::default()
//!         .progress(30)
//!         .reached_color(Color::RED),
//! );
//! let size = bar.measure(&Constraint::NONE);
//! bar.layout(size);
//!
//! let commands = bar.draw_commands();
//! assert_eq!(commands[0].sweep_angle_degrees, 108.0);
//!
//! let frame = bar.render(&RasterConfig::default()).expect("laid out");
//! assert_eq!(frame.width() as i32, size.width.raw());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod circular_bar;
pub mod geometry;
pub mod pipelines;
pub mod snapshot;
pub mod sweep;

pub use crate::{
    circular_bar::{CircularBar, CircularBarArgs, CircularBarDefaults, Padding},
    geometry::{ArcBounds, ArcGeometry, compute_geometry},
    pipelines::arc::{
        command::{ArcCap, ArcCommand},
        pipeline::{ArcPipeline, RasterConfig, RenderError, save_png},
    },
    snapshot::{CircularBarSnapshot, SnapshotError},
    sweep::ProgressSweep,
};
