//! Marquee - player state controller for a movie-streaming frontend.
//!
//! A [`PlayerController`](services::player::PlayerController) mediates every
//! command sent to a host media resource (play, pause, seek, volume, mute,
//! fullscreen) and keeps a reactive snapshot of its state for the views that
//! render the player.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use marquee::services::player::{PlayerController, SimulatedMedia};
//!
//! # async fn run() -> marquee::Result<()> {
//! let controller = PlayerController::default();
//! let _monitor = controller.attach_live(Arc::new(SimulatedMedia::new().with_duration(168.3)));
//!
//! controller.set_volume(1.5);
//! controller.play().await?;
//! println!("{:?}", controller.player_state());
//! # Ok(())
//! # }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Console command parsing and execution.
pub mod cli;

/// Player services.
pub mod services;

/// Logging initialisation.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{MarqueeError, Result};
