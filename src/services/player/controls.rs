//! Input helpers for the views that drive a [`PlayerController`].

use tracing::instrument;

use super::{MediaError, PlayerController};

/// Horizontal position of a click inside an element, as a fraction of its width.
///
/// Clamped to `0.0..=1.0`; an element with no width yields `0.0`.
pub fn click_fraction(click_x: f64, left: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 {
        return 0.0;
    }

    let fraction = (click_x - left) / width;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

impl PlayerController {
    /// Seek to `fraction` of the known duration, as a click on the progress bar does.
    #[instrument(skip(self))]
    pub fn seek_to_fraction(&self, fraction: f64) {
        let duration = self.player_state().duration;
        self.seek(fraction * duration);
    }

    /// Set the volume from a click on the volume bar.
    pub fn set_volume_from_fraction(&self, fraction: f64) {
        self.set_volume(fraction);
    }

    /// Jump back `step` seconds, stopping at the start.
    pub fn skip_backward(&self, step: f64) {
        let state = self.player_state();
        self.seek((state.current_time - step).max(0.0));
    }

    /// Jump forward `step` seconds, stopping at the known duration.
    pub fn skip_forward(&self, step: f64) {
        let state = self.player_state();
        self.seek((state.current_time + step).min(state.duration));
    }

    /// Pause when playing, otherwise play. Clicking the content area does this.
    ///
    /// # Errors
    ///
    /// Returns the resource's error when starting playback fails.
    pub async fn toggle_playback(&self) -> Result<(), MediaError> {
        if self.player_state().is_playing {
            self.pause();
            Ok(())
        } else {
            self.play().await
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::player::{MediaHandle, PlayerState, SimulatedMedia};

    fn controller_with_duration(duration: f64) -> (PlayerController, Arc<SimulatedMedia>) {
        let controller = PlayerController::default();
        let media = Arc::new(SimulatedMedia::new().with_duration(duration));
        controller.attach(media.clone());
        controller.set_player_state(|prev| PlayerState { duration, ..prev });
        (controller, media)
    }

    #[test]
    fn click_fraction_is_relative_to_element() {
        assert_eq!(click_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(click_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(click_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(click_fraction(10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn half_way_click_seeks_to_middle() {
        let (controller, media) = controller_with_duration(120.0);

        controller.seek_to_fraction(click_fraction(250.0, 50.0, 400.0));

        assert_eq!(controller.player_state().current_time, 60.0);
        assert_eq!(media.current_time(), 60.0);
    }

    #[test]
    fn volume_click_uses_fraction_directly() {
        let (controller, media) = controller_with_duration(120.0);

        controller.set_volume_from_fraction(0.3);

        assert_eq!(controller.player_state().volume.get(), 0.3);
        assert_eq!(media.volume(), 0.3);
    }

    #[test]
    fn skips_stay_within_bounds() {
        let (controller, _media) = controller_with_duration(30.0);

        controller.seek(4.0);
        controller.skip_backward(10.0);
        assert_eq!(controller.player_state().current_time, 0.0);

        controller.seek(25.0);
        controller.skip_forward(10.0);
        assert_eq!(controller.player_state().current_time, 30.0);
    }

    #[tokio::test]
    async fn toggle_playback_alternates() {
        let (controller, media) = controller_with_duration(30.0);

        assert!(controller.toggle_playback().await.is_ok());
        assert!(controller.player_state().is_playing);
        assert!(!media.is_paused());

        assert!(controller.toggle_playback().await.is_ok());
        assert!(!controller.player_state().is_playing);
        assert!(media.is_paused());
    }
}
