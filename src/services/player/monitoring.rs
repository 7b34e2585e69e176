use std::sync::Arc;

use futures::{FutureExt, StreamExt, stream::BoxStream};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

use super::{FullscreenSync, MediaEvent, MediaHandle, PlayerController, PlayerState};

/// Merges media notifications into a controller's snapshot.
///
/// Aborts the background task when dropped, which is how a view removes its
/// subscription on teardown.
#[derive(Debug)]
pub struct PlayerMonitor {
    handle: JoinHandle<()>,
}

impl PlayerMonitor {
    /// Start listening to `media` on behalf of `controller`.
    ///
    /// If the media already knows its length, it is merged right away so a
    /// view mounted after metadata loaded still shows the duration.
    #[instrument(skip_all)]
    pub fn start(controller: PlayerController, media: Arc<dyn MediaHandle>) -> Self {
        let mut events = media.events();
        merge_loaded_duration(&controller, media.as_ref());

        let handle = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                merge(&controller, event);
            }
            debug!("Media event stream ended");
        });

        Self { handle }
    }
}

impl Drop for PlayerMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Merge the media's length if it is already known.
pub(crate) fn merge_loaded_duration(controller: &PlayerController, media: &dyn MediaHandle) {
    let duration = known_duration(media.duration());
    if duration > 0.0 {
        debug!(duration, "Media already loaded, merging duration");
        merge(controller, MediaEvent::LoadedMetadata { duration });
    }
}

/// Merge every notification already queued on `events`, without waiting for more.
///
/// Returns how many were merged.
pub(crate) fn merge_pending(
    controller: &PlayerController,
    events: &mut BoxStream<'static, MediaEvent>,
) -> usize {
    let mut merged = 0;

    // Unconstrained so a spent cooperative budget cannot hide a queued event.
    while let Some(Some(event)) = tokio::task::unconstrained(events.next()).now_or_never() {
        merge(controller, event);
        merged += 1;
    }

    merged
}

/// Lengths that are not finite and positive count as unknown.
fn known_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}

/// Apply one resource notification to the snapshot.
pub(crate) fn merge(controller: &PlayerController, event: MediaEvent) {
    trace!(?event, "Merging media event");

    match event {
        MediaEvent::TimeUpdate { current_time } => {
            controller.set_player_state(|prev| PlayerState {
                current_time,
                ..prev
            });
        }
        MediaEvent::LoadedMetadata { duration } => {
            let duration = known_duration(duration);
            controller.set_player_state(|prev| PlayerState { duration, ..prev });
        }
        MediaEvent::FullscreenChanged { active } => {
            if controller.config().fullscreen_sync == FullscreenSync::Confirmed {
                controller.set_player_state(|prev| PlayerState {
                    is_fullscreen: active,
                    ..prev
                });
            }
        }
    }
}
