//! Draw pipelines for circular-bar widgets.

pub mod arc;
