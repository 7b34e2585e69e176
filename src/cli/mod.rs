//! Line-oriented console for driving a player session by hand.
//!
//! Commands map one to one onto controller operations; `tick` and `load`
//! stand in for time passing and metadata arriving on the simulated media.

pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::ConsoleService;
pub use types::{COMMANDS, CliError, CommandResult, ConsoleCommand};
