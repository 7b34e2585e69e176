use std::fmt;
use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Output gain in `0.0..=1.0`.
///
/// Every constructor clamps, so a `Volume` held anywhere in the crate is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    /// Full volume.
    pub const MAX: Volume = Volume(1.0);

    /// Silence (distinct from muting).
    pub const MIN: Volume = Volume(0.0);

    /// Clamp `level` into `0.0..=1.0`. NaN is treated as silence.
    pub fn new(level: f64) -> Self {
        if level.is_nan() {
            warn!("Volume NaN replaced with 0.0");
            return Self::MIN;
        }

        let clamped = level.clamp(0.0, 1.0);
        if clamped != level {
            warn!("Volume {level} clamped to {clamped}");
        }

        Self(clamped)
    }

    /// The gain as a float.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<f64> for Volume {
    fn from(level: f64) -> Self {
        Self::new(level)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// Local snapshot of the media resource's state.
///
/// Mirrors the resource with possible lag: `is_playing` reflects the last
/// commanded state, `current_time` and `duration` the last merged
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Whether playback was last commanded to run.
    pub is_playing: bool,
    /// Playback offset in seconds.
    pub current_time: f64,
    /// Resource length in seconds; `0.0` until metadata loads.
    pub duration: f64,
    /// Output gain.
    pub volume: Volume,
    /// Mute flag, independent of `volume`.
    pub is_muted: bool,
    /// Presentation mode flag.
    pub is_fullscreen: bool,
}

impl PlayerState {
    /// Fraction of the resource already played, for progress bars.
    ///
    /// `0.0` while the duration is unknown.
    pub fn progress(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.current_time / self.duration
        } else {
            0.0
        }
    }
}

/// Formats seconds as `m:ss`, flooring both parts.
///
/// Negative and non-finite inputs render as `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    format!("{}:{:02}", total / 60, total % 60)
}

/// When the snapshot's fullscreen flag follows a fullscreen toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FullscreenSync {
    /// Flip the flag as soon as the request is issued. A request denied by
    /// the host leaves the flag set.
    #[default]
    Optimistic,

    /// Only change the flag when the host reports a fullscreen change.
    Confirmed,
}

/// How a `play()` that resolves after a later `pause()` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PlayOrdering {
    /// Resolutions are applied in the order they complete.
    #[default]
    LastWriter,

    /// A resolution is dropped if another play/pause was issued after it.
    LatestIntent,
}
