//! Interactive console for a simulated player session.
//!
//! Reads one command per line from stdin and prints the player state after
//! each one. Logs go to stderr.

use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use marquee::{
    cli::{ConsoleCommand, ConsoleService, formatting::format_error},
    config::Config,
    services::player::{MediaError, SimulatedMedia},
    tracing_config,
};

#[derive(Parser, Debug)]
#[command(name = "marquee-console", about = "Drive a player session from the terminal")]
struct Args {
    /// Configuration file (defaults to $XDG_CONFIG_HOME/marquee/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Length of the simulated media in seconds; omit to load it later with `load`
    #[arg(long)]
    duration: Option<f64>,

    /// Make every play request fail with this reason
    #[arg(long, value_name = "REASON")]
    reject_play: Option<String>,

    /// Make the host deny fullscreen requests
    #[arg(long)]
    deny_fullscreen: bool,

    /// Print the player state as JSON
    #[arg(long)]
    json: bool,

    /// Also write logs to a daily file under ~/.marquee/logs
    #[arg(long)]
    log_file: bool,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Print the configuration JSON schema and exit
    Schema,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(Mode::Schema) = args.command {
        println!("{}", serde_json::to_string_pretty(&Config::schema())?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let _log_guard = if args.log_file {
        Some(tracing_config::init_with_file(config.general.log_level)?)
    } else {
        tracing_config::init(config.general.log_level)?;
        None
    };

    let mut media = SimulatedMedia::new();
    if let Some(duration) = args.duration {
        media = media.with_duration(duration);
    }
    if let Some(reason) = args.reject_play {
        media = media.with_start_error(MediaError::StartRejected(reason));
    }
    if args.deny_fullscreen {
        media = media.with_fullscreen_denied();
    }

    let console = ConsoleService::new(config.player, media, args.json);
    info!("Player session started");
    println!("{}", console.render()?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", format_error(&e.to_string()));
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        match console.execute(command).await {
            Ok(output) => println!("{output}"),
            Err(e) => {
                warn!(error = %e, "Command failed");
                eprintln!("{}", format_error(&e.to_string()));
            }
        }
    }

    info!("Player session ended");
    Ok(())
}
