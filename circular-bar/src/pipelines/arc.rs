//! Arc rendering pipeline for circular bars.
//!
//! ## Usage
//!
//! Use to stroke the reached and unreached arcs into an RGBA target.

pub mod command;
pub mod pipeline;
