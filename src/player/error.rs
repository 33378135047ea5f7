//! Error types for playback control

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Asked to load a track without a name
    #[error("track name is empty")]
    MissingTrackName,

    /// Operation needs a loaded track
    #[error("no track loaded")]
    NoTrackLoaded,

    /// Seek before the media reported a usable duration
    #[error("track duration is not known yet")]
    DurationUnknown,

    /// Stream address could not be built
    #[error("invalid stream address: {0}")]
    Address(#[from] url::ParseError),

    /// Audio element error
    #[error("audio backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
