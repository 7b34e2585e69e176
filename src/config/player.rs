use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::player::{FullscreenSync, PlayOrdering};

/// Player session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Volume applied to the media handle when a session starts, clamped to `0.0..=1.0`.
    pub initial_volume: f64,

    /// Whether the media handle starts muted.
    pub start_muted: bool,

    /// Seconds moved by the skip backward / skip forward controls.
    pub seek_step: f64,

    /// When the fullscreen flag in the snapshot is updated.
    pub fullscreen_sync: FullscreenSync,

    /// How overlapping play/pause commands resolve.
    pub play_ordering: PlayOrdering,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            start_muted: false,
            seek_step: 10.0,
            fullscreen_sync: FullscreenSync::default(),
            play_ordering: PlayOrdering::default(),
        }
    }
}
