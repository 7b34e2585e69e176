//! Player state controller for a single media resource.
//!
//! A [`PlayerController`] owns the session's [`PlayerState`] snapshot and is
//! the only path through which views command the attached [`MediaHandle`].
//! A [`PlayerMonitor`] feeds resource notifications back into the snapshot.

mod controller;
mod controls;
mod error;
mod handle;
mod monitoring;
mod simulated;
mod types;

pub use controller::PlayerController;
pub use controls::click_fraction;
pub use error::MediaError;
pub use handle::{MediaEvent, MediaHandle};
pub use monitoring::PlayerMonitor;
pub(crate) use monitoring::{merge_loaded_duration, merge_pending};
pub use simulated::SimulatedMedia;
pub use types::{FullscreenSync, PlayOrdering, PlayerState, Volume, format_timestamp};
