//! Formatting utilities for console output.

use crate::services::player::{PlayerState, format_timestamp};

use super::types::COMMANDS;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// One-line summary of a snapshot, as the player chrome would show it.
///
/// ```
/// use marquee::cli::formatting::format_state;
/// use marquee::services::player::PlayerState;
///
/// let state = PlayerState { current_time: 62.0, duration: 168.3, ..PlayerState::default() };
/// assert_eq!(format_state(&state), "paused 1:02 / 2:48 | volume 100%");
/// ```
pub fn format_state(state: &PlayerState) -> String {
    let mut line = format!(
        "{} {} / {} | volume {}",
        if state.is_playing { "playing" } else { "paused" },
        format_timestamp(state.current_time),
        format_timestamp(state.duration),
        state.volume,
    );

    if state.is_muted {
        line.push_str(" | muted");
    }
    if state.is_fullscreen {
        line.push_str(" | fullscreen");
    }

    line
}

/// Help text listing every console command.
pub fn format_help() -> String {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);

    let mut out = format_header("Commands:");
    for (usage, description) in COMMANDS {
        out.push('\n');
        out.push_str(&format!(
            "  {}{}  {}",
            format_command(usage),
            " ".repeat(width - usage.len()),
            format_description(description)
        ));
    }

    out
}
