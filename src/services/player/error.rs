/// Errors surfaced by a media handle.
///
/// Only starting playback has an error channel; every other command is
/// fire-and-forget.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The resource refused to start playback.
    #[error("playback start rejected: {0}")]
    StartRejected(String),

    /// No playable source is loaded.
    #[error("no media source loaded")]
    NoSource,

    /// The source could not be decoded.
    #[error("failed to decode media: {0}")]
    Decode(String),
}
