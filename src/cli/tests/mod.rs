//! Unit tests for console parsing, formatting and execution.

#![allow(clippy::unwrap_used)]

use crate::cli::{
    COMMANDS, CliError, ConsoleCommand, ConsoleService,
    formatting::{format_help, format_state},
};
use crate::config::PlayerConfig;
use crate::services::player::{MediaError, PlayerState, SimulatedMedia, Volume};

#[test]
fn parses_commands_with_and_without_arguments() {
    assert_eq!("play".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Play);
    assert_eq!(
        "seek 42".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::Seek(42.0)
    );
    assert_eq!(
        "  click-seek   0.5 ".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::ClickSeek(0.5)
    );
    assert_eq!("exit".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Quit);
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(
        "rewind".parse::<ConsoleCommand>(),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        "seek".parse::<ConsoleCommand>(),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        "volume loud".parse::<ConsoleCommand>(),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        "mute now".parse::<ConsoleCommand>(),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        "seek 1 2".parse::<ConsoleCommand>(),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn every_listed_command_parses() {
    for (usage, _) in COMMANDS {
        let line = usage.replace("<seconds>", "1").replace("<level>", "0.5");
        let line = line.replace("<fraction>", "0.5");
        assert!(line.parse::<ConsoleCommand>().is_ok(), "{line}");
    }
}

#[test]
fn state_line_lists_active_flags() {
    let state = PlayerState {
        is_playing: true,
        current_time: 5.0,
        duration: 60.0,
        volume: Volume::new(0.5),
        is_muted: true,
        is_fullscreen: true,
    };

    assert_eq!(
        format_state(&state),
        "playing 0:05 / 1:00 | volume 50% | muted | fullscreen"
    );
}

#[test]
fn help_mentions_every_command() {
    let help = format_help();
    for (usage, _) in COMMANDS {
        assert!(help.contains(usage));
    }
}

#[tokio::test]
async fn executes_scripted_session() {
    let console = ConsoleService::new(
        PlayerConfig::default(),
        SimulatedMedia::new().with_duration(120.0),
        false,
    );

    let script = [
        (ConsoleCommand::Volume(1.5), "paused 0:00 / 2:00 | volume 100%"),
        (ConsoleCommand::Play, "playing 0:00 / 2:00 | volume 100%"),
        (ConsoleCommand::Tick(30.0), "playing 0:30 / 2:00 | volume 100%"),
        (ConsoleCommand::Forward, "playing 0:40 / 2:00 | volume 100%"),
        (ConsoleCommand::Seek(500.0), "playing 2:00 / 2:00 | volume 100%"),
        (ConsoleCommand::Mute, "playing 2:00 / 2:00 | volume 100% | muted"),
        (ConsoleCommand::Load(90.0), "playing 2:00 / 1:30 | volume 100% | muted"),
        (ConsoleCommand::Pause, "paused 2:00 / 1:30 | volume 100% | muted"),
    ];

    for (command, expected) in script {
        assert_eq!(console.execute(command).await.unwrap(), expected, "{command:?}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn output_reflects_notifications_raised_by_the_command() {
    for i in 1..=300 {
        let duration = f64::from(i);
        let console = ConsoleService::new(PlayerConfig::default(), SimulatedMedia::new(), true);

        let output = console.execute(ConsoleCommand::Load(duration)).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["duration"], duration, "load {duration}");

        let output = console.execute(ConsoleCommand::Seek(duration * 2.0)).await.unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["currentTime"], duration, "seek past {duration}");
    }
}

#[tokio::test]
async fn unusable_lengths_print_as_unknown() {
    let console = ConsoleService::new(PlayerConfig::default(), SimulatedMedia::new(), false);

    assert_eq!(
        console.execute(ConsoleCommand::Load(-5.0)).await.unwrap(),
        "paused 0:00 / 0:00 | volume 100%"
    );
    assert_eq!(console.controller().player_state().duration, 0.0);
}

#[tokio::test]
async fn initial_render_includes_preloaded_length() {
    let console = ConsoleService::new(
        PlayerConfig::default(),
        SimulatedMedia::new().with_duration(168.3),
        false,
    );

    assert_eq!(console.render().unwrap(), "paused 0:00 / 2:48 | volume 100%");
}

#[tokio::test]
async fn rejected_play_surfaces_as_playback_error() {
    let console = ConsoleService::new(
        PlayerConfig::default(),
        SimulatedMedia::new().with_start_error(MediaError::NoSource),
        false,
    );

    let result = console.execute(ConsoleCommand::Play).await;

    assert!(matches!(result, Err(CliError::Playback(MediaError::NoSource))));
}

#[tokio::test]
async fn json_output_uses_snapshot_field_names() {
    let console = ConsoleService::new(PlayerConfig::default(), SimulatedMedia::new(), true);

    let output = console.execute(ConsoleCommand::Mute).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["isMuted"], true);
    assert_eq!(json["currentTime"], 0.0);
}
