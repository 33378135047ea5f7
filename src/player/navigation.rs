//! Previous/next within the album the current track was loaded from.

use crate::player::{backend::AudioBackend, controller::PlaybackController, error::Result};
use tracing::debug;

/// Index before `current`; none at the start or when the track is unknown.
pub fn previous_index(current: Option<usize>) -> Option<usize> {
    current.filter(|index| *index > 0).map(|index| index - 1)
}

/// Index after `current`, wrapping from the last entry back to the first.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    let index = current?;
    if index + 1 < len {
        Some(index + 1)
    } else if index + 1 == len {
        Some(0)
    } else {
        None
    }
}

impl<B: AudioBackend> PlaybackController<B> {
    /// Play the previous track. Returns whether a track was loaded.
    pub fn previous(&mut self) -> Result<bool> {
        let target = previous_index(self.session().current_index());
        self.step_to(target)
    }

    /// Play the next track, wrapping at the end. Returns whether a track was
    /// loaded.
    pub fn next(&mut self) -> Result<bool> {
        let session = self.session();
        let target = next_index(session.current_index(), session.listing.len());
        self.step_to(target)
    }

    fn step_to(&mut self, target: Option<usize>) -> Result<bool> {
        let Some(index) = target else {
            debug!(track = ?self.session().current_track(), "no track to step to");
            return Ok(false);
        };
        let listing = self.session().listing.clone();
        self.load_index(&listing, index, true)?;
        Ok(true)
    }
}
