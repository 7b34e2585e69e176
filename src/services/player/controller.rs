use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use futures::Stream;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::config::PlayerConfig;
use crate::services::common::Property;

use super::{
    FullscreenSync, MediaError, MediaHandle, PlayOrdering, PlayerMonitor, PlayerState, Volume,
};

type HandleSlot = watch::Sender<Option<Arc<dyn MediaHandle>>>;

/// Single source of truth for one player session.
///
/// Mediates every read and write of the attached [`MediaHandle`] and keeps a
/// [`PlayerState`] snapshot that views render from. Cloning is cheap and all
/// clones share the same session, so one controller can be handed to both the
/// chrome and the content view.
///
/// Commands issued while no handle is attached are ignored.
#[derive(Clone, Debug)]
pub struct PlayerController {
    handle: Arc<HandleSlot>,
    state: Property<PlayerState>,
    intent: Arc<AtomicU64>,
    config: PlayerConfig,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl PlayerController {
    /// Create a controller with no media attached.
    pub fn new(config: PlayerConfig) -> Self {
        let (handle, _) = watch::channel(None);
        let state = PlayerState {
            volume: Volume::new(config.initial_volume),
            is_muted: config.start_muted,
            ..PlayerState::default()
        };

        Self {
            handle: Arc::new(handle),
            state: Property::new(state),
            intent: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    /// Attach the media resource this session controls.
    ///
    /// Replaces any previously attached handle. The snapshot's volume and
    /// mute flag are pushed to the new handle so both start in agreement.
    #[instrument(skip_all)]
    pub fn attach(&self, handle: Arc<dyn MediaHandle>) {
        let state = self.state.get();
        handle.set_volume(state.volume.get());
        handle.set_muted(state.is_muted);

        info!("Media attached");
        self.handle.send_replace(Some(handle));
    }

    /// Attach `handle` and start merging its notifications into the snapshot.
    ///
    /// Notifications stop when the returned monitor is dropped.
    pub fn attach_live(&self, handle: Arc<dyn MediaHandle>) -> PlayerMonitor {
        self.attach(Arc::clone(&handle));
        PlayerMonitor::start(self.clone(), handle)
    }

    /// Release the attached handle. Later commands become no-ops.
    pub fn detach(&self) {
        if self.handle.send_replace(None).is_some() {
            info!("Media detached");
        }
    }

    /// Whether a media handle is attached.
    pub fn is_attached(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Current snapshot.
    pub fn player_state(&self) -> PlayerState {
        self.state.get()
    }

    /// Stream of snapshots, starting with the current one.
    pub fn watch(&self) -> impl Stream<Item = PlayerState> + Send + use<> {
        self.state.watch()
    }

    /// Session configuration.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Start playback.
    ///
    /// Suspends until the resource confirms, then marks the snapshot as
    /// playing. With [`PlayOrdering::LatestIntent`] the snapshot is left
    /// alone if another play or pause was issued while this one was pending.
    ///
    /// # Errors
    ///
    /// Returns the resource's error if it refuses to start; the snapshot is
    /// not modified in that case.
    #[instrument(skip(self))]
    pub async fn play(&self) -> Result<(), MediaError> {
        let Some(handle) = self.current_handle() else {
            debug!("play ignored: no media attached");
            return Ok(());
        };

        let ticket = self.issue_intent();

        if let Err(e) = handle.play().await {
            warn!(error = %e, "Media refused to start");
            return Err(e);
        }

        if self.config.play_ordering == PlayOrdering::LatestIntent && !self.is_latest(ticket) {
            debug!(ticket, "play resolved after a newer command, snapshot unchanged");
            return Ok(());
        }

        self.state.update(|s| PlayerState {
            is_playing: true,
            ..*s
        });
        Ok(())
    }

    /// Stop playback.
    #[instrument(skip(self))]
    pub fn pause(&self) {
        let Some(handle) = self.current_handle() else {
            debug!("pause ignored: no media attached");
            return;
        };

        self.issue_intent();
        handle.pause();
        self.state.update(|s| PlayerState {
            is_playing: false,
            ..*s
        });
    }

    /// Jump to `time` seconds.
    ///
    /// The value is passed through unchanged; the resource decides what an
    /// out-of-range position means.
    #[instrument(skip(self))]
    pub fn seek(&self, time: f64) {
        let Some(handle) = self.current_handle() else {
            debug!("seek ignored: no media attached");
            return;
        };

        handle.set_current_time(time);
        self.state.update(|s| PlayerState {
            current_time: time,
            ..*s
        });
    }

    /// Set the output gain, clamped to `0.0..=1.0`.
    #[instrument(skip(self))]
    pub fn set_volume(&self, level: f64) {
        let Some(handle) = self.current_handle() else {
            debug!("set_volume ignored: no media attached");
            return;
        };

        let volume = Volume::new(level);
        handle.set_volume(volume.get());
        self.state.update(|s| PlayerState { volume, ..*s });
    }

    /// Flip the mute flag.
    ///
    /// The handle's flag is the source of truth, so a mute applied outside
    /// the controller is respected.
    #[instrument(skip(self))]
    pub fn toggle_mute(&self) {
        let Some(handle) = self.current_handle() else {
            debug!("toggle_mute ignored: no media attached");
            return;
        };

        let is_muted = !handle.is_muted();
        handle.set_muted(is_muted);
        self.state.update(|s| PlayerState { is_muted, ..*s });
    }

    /// Enter fullscreen unless the host already shows something fullscreen,
    /// in which case exit.
    ///
    /// With [`FullscreenSync::Optimistic`] the snapshot flips immediately,
    /// even if the host later denies the request. With
    /// [`FullscreenSync::Confirmed`] it waits for the host's notification.
    #[instrument(skip(self))]
    pub fn toggle_fullscreen(&self) {
        let Some(handle) = self.current_handle() else {
            debug!("toggle_fullscreen ignored: no media attached");
            return;
        };

        let entering = !handle.fullscreen_active();
        if entering {
            handle.request_fullscreen();
        } else {
            handle.exit_fullscreen();
        }

        if self.config.fullscreen_sync == FullscreenSync::Optimistic {
            self.state.update(|s| PlayerState {
                is_fullscreen: entering,
                ..*s
            });
        }
    }

    /// Replace the snapshot with `updater(current)`.
    ///
    /// Does not touch the media handle. Used to merge resource notifications.
    pub fn set_player_state<F>(&self, updater: F)
    where
        F: FnOnce(PlayerState) -> PlayerState,
    {
        self.state.update(|s| updater(*s));
    }

    fn current_handle(&self) -> Option<Arc<dyn MediaHandle>> {
        self.handle.borrow().clone()
    }

    fn issue_intent(&self) -> u64 {
        self.intent.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.intent.load(Ordering::SeqCst) == ticket
    }
}
