use std::time::Duration;

use async_trait::async_trait;
use futures::{StreamExt, future, stream::BoxStream};
use tokio::sync::{broadcast, watch};
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, trace};

use super::{MediaError, MediaEvent, MediaHandle};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct SimState {
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    fullscreen: bool,
}

/// In-memory media resource.
///
/// Behaves like a headless video element: time only moves when
/// [`SimulatedMedia::advance`] is called, seeks are clamped to the loaded
/// length, and every position change emits a time update. Start failures
/// and fullscreen denial can be scripted.
#[derive(Debug)]
pub struct SimulatedMedia {
    state: watch::Sender<SimState>,
    events: broadcast::Sender<MediaEvent>,
    start_error: Option<MediaError>,
    deny_fullscreen: bool,
    play_delay: Duration,
}

impl Default for SimulatedMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMedia {
    /// A paused resource with no metadata loaded yet.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SimState {
            paused: true,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            fullscreen: false,
        });
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            state,
            events,
            start_error: None,
            deny_fullscreen: false,
            play_delay: Duration::ZERO,
        }
    }

    /// Start with metadata already loaded.
    pub fn with_duration(self, duration: f64) -> Self {
        self.state.send_modify(|s| s.duration = duration);
        self
    }

    /// Make every `play()` fail with `error`.
    pub fn with_start_error(mut self, error: MediaError) -> Self {
        self.start_error = Some(error);
        self
    }

    /// Make the host ignore fullscreen requests.
    pub fn with_fullscreen_denied(mut self) -> Self {
        self.deny_fullscreen = true;
        self
    }

    /// Delay before `play()` resolves.
    pub fn with_play_delay(mut self, delay: Duration) -> Self {
        self.play_delay = delay;
        self
    }

    /// Whether the resource is paused.
    pub fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    /// Finish loading metadata and announce the length.
    pub fn load_metadata(&self, duration: f64) {
        self.state.send_modify(|s| s.duration = duration);
        self.emit(MediaEvent::LoadedMetadata { duration });
    }

    /// Let `seconds` of playback elapse. Does nothing while paused.
    ///
    /// Reaching the end pauses the resource.
    pub fn advance(&self, seconds: f64) {
        let mut position = None;
        self.state.send_modify(|s| {
            if s.paused {
                return;
            }

            let mut next = s.current_time + seconds;
            if s.duration > 0.0 && next >= s.duration {
                next = s.duration;
                s.paused = true;
            }
            s.current_time = next;
            position = Some(next);
        });

        if let Some(current_time) = position {
            self.emit(MediaEvent::TimeUpdate { current_time });
        }
    }

    /// Change the mute flag without going through a controller, as a
    /// browser's own UI would.
    pub fn set_muted_externally(&self, muted: bool) {
        self.state.send_modify(|s| s.muted = muted);
    }

    /// Leave fullscreen from the host side, as pressing Escape would.
    pub fn exit_fullscreen_externally(&self) {
        self.exit_fullscreen();
    }

    fn emit(&self, event: MediaEvent) {
        trace!(?event, "Emitting media event");
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl MediaHandle for SimulatedMedia {
    async fn play(&self) -> Result<(), MediaError> {
        if !self.play_delay.is_zero() {
            tokio::time::sleep(self.play_delay).await;
        }

        if let Some(error) = &self.start_error {
            return Err(error.clone());
        }

        self.state.send_modify(|s| {
            if s.duration > 0.0 && s.current_time >= s.duration {
                s.current_time = 0.0;
            }
            s.paused = false;
        });
        Ok(())
    }

    fn pause(&self) {
        self.state.send_modify(|s| s.paused = true);
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&self, seconds: f64) {
        if seconds.is_nan() {
            debug!("Ignoring NaN seek");
            return;
        }

        let mut position = 0.0;
        self.state.send_modify(|s| {
            let upper = if s.duration > 0.0 { s.duration } else { f64::MAX };
            s.current_time = seconds.clamp(0.0, upper);
            position = s.current_time;
        });

        self.emit(MediaEvent::TimeUpdate {
            current_time: position,
        });
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    fn set_volume(&self, volume: f64) {
        self.state.send_modify(|s| s.volume = volume);
    }

    fn is_muted(&self) -> bool {
        self.state.borrow().muted
    }

    fn set_muted(&self, muted: bool) {
        self.state.send_modify(|s| s.muted = muted);
    }

    fn fullscreen_active(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn request_fullscreen(&self) {
        if self.deny_fullscreen {
            debug!("Fullscreen request denied by host");
            return;
        }

        let entered = self.state.send_if_modified(|s| !std::mem::replace(&mut s.fullscreen, true));
        if entered {
            self.emit(MediaEvent::FullscreenChanged { active: true });
        }
    }

    fn exit_fullscreen(&self) {
        let exited = self.state.send_if_modified(|s| std::mem::replace(&mut s.fullscreen, false));
        if exited {
            self.emit(MediaEvent::FullscreenChanged { active: false });
        }
    }

    fn events(&self) -> BoxStream<'static, MediaEvent> {
        BroadcastStream::new(self.events.subscribe())
            .filter_map(|event| future::ready(event.ok()))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeks_clamp_to_loaded_length() {
        let media = SimulatedMedia::new().with_duration(120.0);

        media.set_current_time(500.0);
        assert_eq!(media.current_time(), 120.0);

        media.set_current_time(-3.0);
        assert_eq!(media.current_time(), 0.0);
    }

    #[tokio::test]
    async fn advance_only_moves_while_playing_and_stops_at_end() {
        let media = SimulatedMedia::new().with_duration(10.0);

        media.advance(4.0);
        assert_eq!(media.current_time(), 0.0);

        assert!(media.play().await.is_ok());
        media.advance(4.0);
        assert_eq!(media.current_time(), 4.0);

        media.advance(20.0);
        assert_eq!(media.current_time(), 10.0);
        assert!(media.is_paused());
    }

    #[tokio::test]
    async fn scripted_start_error_is_returned() {
        let media = SimulatedMedia::new().with_start_error(MediaError::NoSource);

        assert_eq!(media.play().await, Err(MediaError::NoSource));
        assert!(media.is_paused());
    }

    #[tokio::test]
    async fn fullscreen_changes_are_announced() {
        let media = SimulatedMedia::new();
        let mut events = media.events();

        media.request_fullscreen();
        media.request_fullscreen();
        media.exit_fullscreen();

        assert_eq!(
            events.next().await,
            Some(MediaEvent::FullscreenChanged { active: true })
        );
        assert_eq!(
            events.next().await,
            Some(MediaEvent::FullscreenChanged { active: false })
        );
    }

    #[test]
    fn denied_fullscreen_leaves_host_flag_unset() {
        let media = SimulatedMedia::new().with_fullscreen_denied();

        media.request_fullscreen();
        assert!(!media.fullscreen_active());
    }
}
