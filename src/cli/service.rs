use std::sync::Arc;

use futures::stream::BoxStream;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::config::PlayerConfig;
use crate::services::player::{
    MediaEvent, MediaHandle, PlayerController, SimulatedMedia, merge_loaded_duration,
    merge_pending,
};

use super::{CommandResult, ConsoleCommand, formatting};

/// Drives a player session over a simulated media resource.
///
/// Plays the part of both player views: it forwards commands to the
/// controller and merges the media's notifications. Notifications are merged
/// after each command rather than by a background task, so the state printed
/// for a command always includes what that command caused.
pub struct ConsoleService {
    controller: PlayerController,
    media: Arc<SimulatedMedia>,
    events: Mutex<BoxStream<'static, MediaEvent>>,
    json: bool,
}

impl ConsoleService {
    /// Starts a session on `media`.
    pub fn new(config: PlayerConfig, media: SimulatedMedia, json: bool) -> Self {
        let media = Arc::new(media);
        let events = media.events();
        let controller = PlayerController::new(config);
        controller.attach(media.clone());
        merge_loaded_duration(&controller, media.as_ref());

        Self {
            controller,
            media,
            events: Mutex::new(events),
            json,
        }
    }

    /// The session's controller.
    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    /// Runs one command and returns what to print.
    ///
    /// # Errors
    /// Returns `CliError::Playback` if the media refuses to start, or
    /// `CliError::Output` if the snapshot cannot be serialized.
    #[instrument(skip(self))]
    pub async fn execute(&self, command: ConsoleCommand) -> CommandResult {
        let step = self.controller.config().seek_step;

        match command {
            ConsoleCommand::Play => self.controller.play().await?,
            ConsoleCommand::Pause => self.controller.pause(),
            ConsoleCommand::Toggle => self.controller.toggle_playback().await?,
            ConsoleCommand::Seek(time) => self.controller.seek(time),
            ConsoleCommand::Volume(level) => self.controller.set_volume(level),
            ConsoleCommand::Mute => self.controller.toggle_mute(),
            ConsoleCommand::Fullscreen => self.controller.toggle_fullscreen(),
            ConsoleCommand::ClickSeek(fraction) => self.controller.seek_to_fraction(fraction),
            ConsoleCommand::ClickVolume(fraction) => {
                self.controller.set_volume_from_fraction(fraction)
            }
            ConsoleCommand::Back => self.controller.skip_backward(step),
            ConsoleCommand::Forward => self.controller.skip_forward(step),
            ConsoleCommand::Tick(seconds) => self.media.advance(seconds),
            ConsoleCommand::Load(duration) => self.media.load_metadata(duration),
            ConsoleCommand::State => {}
            ConsoleCommand::Help => return Ok(formatting::format_help()),
            ConsoleCommand::Quit => return Ok(String::new()),
        }

        let merged = merge_pending(&self.controller, &mut *self.events.lock().await);
        debug!(merged, state = ?self.controller.player_state(), "Command applied");

        self.render()
    }

    /// The current snapshot, as text or JSON.
    ///
    /// # Errors
    /// Returns `CliError::Output` if JSON serialization fails.
    pub fn render(&self) -> CommandResult {
        let state = self.controller.player_state();

        if self.json {
            Ok(serde_json::to_string(&state)?)
        } else {
            Ok(formatting::format_state(&state))
        }
    }
}
