use std::str::FromStr;

use thiserror::Error;

use crate::services::player::MediaError;

/// Errors that can occur while running console commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// The command word is not known.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The command was recognised but its arguments were not.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The media resource refused a command.
    #[error("Playback error: {0}")]
    Playback(#[from] MediaError),

    /// Serializing the snapshot failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Successful commands return the text to print.
pub type CommandResult = Result<String, CliError>;

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    /// Start playback
    Play,
    /// Stop playback
    Pause,
    /// Pause if playing, else play
    Toggle,
    /// Jump to an absolute position in seconds
    Seek(f64),
    /// Set the output gain
    Volume(f64),
    /// Flip the mute flag
    Mute,
    /// Enter or leave fullscreen
    Fullscreen,
    /// Seek to a fraction of the duration, as a progress-bar click
    ClickSeek(f64),
    /// Set the volume from a fraction, as a volume-bar click
    ClickVolume(f64),
    /// Skip backward by the configured step
    Back,
    /// Skip forward by the configured step
    Forward,
    /// Let simulated playback time elapse
    Tick(f64),
    /// Finish loading simulated metadata with the given duration
    Load(f64),
    /// Print the snapshot
    State,
    /// Print command help
    Help,
    /// Leave the console
    Quit,
}

/// Usage and description for every console command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("play", "Start playback"),
    ("pause", "Stop playback"),
    ("toggle", "Pause if playing, otherwise play"),
    ("seek <seconds>", "Jump to an absolute position"),
    ("volume <level>", "Set volume (clamped to 0..1)"),
    ("mute", "Toggle mute"),
    ("fullscreen", "Toggle fullscreen"),
    ("click-seek <fraction>", "Seek as a click on the progress bar"),
    ("click-volume <fraction>", "Set volume as a click on the volume bar"),
    ("back", "Skip backward by the seek step"),
    ("forward", "Skip forward by the seek step"),
    ("tick <seconds>", "Let simulated playback time elapse"),
    ("load <seconds>", "Finish loading metadata with a duration"),
    ("state", "Print the player state"),
    ("help", "Show this help"),
    ("quit", "Exit the console"),
];

impl FromStr for ConsoleCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("help");
        let arg = words.next();

        if let Some(extra) = words.next() {
            return Err(CliError::InvalidArguments(format!(
                "unexpected argument '{extra}' for '{name}'"
            )));
        }

        let command = match name {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "toggle" => Self::Toggle,
            "seek" => Self::Seek(number(name, arg)?),
            "volume" => Self::Volume(number(name, arg)?),
            "mute" => Self::Mute,
            "fullscreen" => Self::Fullscreen,
            "click-seek" => Self::ClickSeek(number(name, arg)?),
            "click-volume" => Self::ClickVolume(number(name, arg)?),
            "back" => Self::Back,
            "forward" => Self::Forward,
            "tick" => Self::Tick(number(name, arg)?),
            "load" => Self::Load(number(name, arg)?),
            "state" => Self::State,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CliError::CommandNotFound(other.to_string())),
        };

        if arg.is_some() && !command.takes_argument() {
            return Err(CliError::InvalidArguments(format!(
                "'{name}' takes no arguments"
            )));
        }

        Ok(command)
    }
}

impl ConsoleCommand {
    fn takes_argument(self) -> bool {
        matches!(
            self,
            Self::Seek(_)
                | Self::Volume(_)
                | Self::ClickSeek(_)
                | Self::ClickVolume(_)
                | Self::Tick(_)
                | Self::Load(_)
        )
    }
}

fn number(name: &str, arg: Option<&str>) -> Result<f64, CliError> {
    let raw = arg.ok_or_else(|| CliError::InvalidArguments(format!("'{name}' needs a number")))?;

    raw.parse::<f64>()
        .map_err(|_| CliError::InvalidArguments(format!("'{raw}' is not a number")))
}
