use std::fmt::Debug;

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::MediaError;

/// Notifications raised by the media resource itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position advanced or jumped.
    TimeUpdate {
        /// New position in seconds
        current_time: f64,
    },

    /// Metadata finished loading and the length is known.
    LoadedMetadata {
        /// Resource length in seconds
        duration: f64,
    },

    /// The host entered or left fullscreen presentation.
    FullscreenChanged {
        /// Whether fullscreen is now active
        active: bool,
    },
}

/// A playable resource provided by the host, such as a video element.
///
/// The controller commands it and mirrors its state; implementations decide
/// how out-of-range positions are handled.
#[async_trait]
pub trait MediaHandle: Send + Sync + Debug {
    /// Start playback, resolving once the resource confirms.
    ///
    /// # Errors
    ///
    /// Returns the resource's reason when it refuses to start.
    async fn play(&self) -> Result<(), MediaError>;

    /// Stop advancing time.
    fn pause(&self);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Jump to `seconds`.
    fn set_current_time(&self, seconds: f64);

    /// Length in seconds. `0.0` or NaN before metadata loads.
    fn duration(&self) -> f64;

    /// Output gain in `0.0..=1.0`.
    fn volume(&self) -> f64;

    /// Set the output gain.
    fn set_volume(&self, volume: f64);

    /// Whether output is muted.
    fn is_muted(&self) -> bool;

    /// Mute or unmute output.
    fn set_muted(&self, muted: bool);

    /// Whether the host currently presents anything fullscreen.
    fn fullscreen_active(&self) -> bool;

    /// Ask the host for fullscreen. The outcome is only observable through
    /// [`MediaEvent::FullscreenChanged`].
    fn request_fullscreen(&self);

    /// Leave fullscreen.
    fn exit_fullscreen(&self);

    /// Stream of resource notifications, live from the time of the call.
    fn events(&self) -> BoxStream<'static, MediaEvent>;
}
