//! Saved view state for [`CircularBar`](crate::CircularBar).
//!
//! A snapshot carries the widget's own fields under fixed keys next to the
//! host's base state, which is kept as an opaque JSON value and handed back
//! untouched on restore.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot could not be serialized.
    #[error("failed to encode circular bar snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    /// The input was not a valid snapshot.
    #[error("failed to decode circular bar snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Key-value view state of a circular bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularBarSnapshot {
    /// Host base view state, passed through unmodified.
    #[serde(rename = "saved_instance", default)]
    pub base_state: Option<serde_json::Value>,
    /// Reached stroke width in pixels.
    #[serde(rename = "reached_bar_height")]
    pub reached_stroke_width: f32,
    /// Unreached stroke width in pixels.
    #[serde(rename = "unreached_bar_height")]
    pub unreached_stroke_width: f32,
    /// Reached color as `0xAARRGGBB`.
    #[serde(rename = "reached_bar_color")]
    pub reached_color: u32,
    /// Unreached color as `0xAARRGGBB`.
    #[serde(rename = "unreached_bar_color")]
    pub unreached_color: u32,
    /// Maximum progress.
    pub max: i32,
    /// Current progress.
    pub progress: i32,
    /// Text suffix; absent restores as empty.
    #[serde(default)]
    pub suffix: Option<String>,
    /// Text prefix; absent restores as empty.
    #[serde(default)]
    pub prefix: Option<String>,
}

impl CircularBarSnapshot {
    /// Encodes the snapshot as a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    /// Decodes a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Decode)
    }
}
