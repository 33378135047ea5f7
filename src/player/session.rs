use crate::api::TrackListing;
use crate::player::clock::RESET_DISPLAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    NoneLoaded,
    Paused,
    Playing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub track: String,
    pub album: String,
}

/// The page-wide playback state. Owned by the controller; the UI only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub state: PlaybackState,
    pub now_playing: Option<NowPlaying>,
    /// Listing the current track was loaded from; drives next/previous.
    pub listing: TrackListing,
    pub position: f64,
    /// NaN until the media reports it.
    pub duration: f64,
    /// Last value of the volume control, 0-100.
    pub volume_level: u8,
    /// Volume to restore on unmute.
    pub remembered_volume: Option<f64>,
    pub muted: bool,
    pub time_display: String,
    pub seek_fill: f64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self {
            state: PlaybackState::NoneLoaded,
            now_playing: None,
            listing: TrackListing::default(),
            position: 0.0,
            duration: f64::NAN,
            volume_level: 100,
            remembered_volume: None,
            muted: false,
            time_display: RESET_DISPLAY.to_string(),
            seek_fill: 0.0,
        }
    }
}

impl PlaybackSession {
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_track(&self) -> Option<&str> {
        self.now_playing.as_ref().map(|now| now.track.as_str())
    }

    /// Index of the current track within its own listing.
    pub fn current_index(&self) -> Option<usize> {
        self.listing.position(self.current_track()?)
    }
}
