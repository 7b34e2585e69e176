/// Shared building blocks for services
pub mod common;
/// Player state controller and media handle abstraction
pub mod player;

pub use player::{MediaHandle, PlayerController, PlayerState};
