//! Playback controller - the single active audio stream
//!
//! Owns the audio backend and the [`PlaybackSession`]. Every UI control goes
//! through here so the session always describes what the backend is doing.

use crate::api::{StreamLocator, TrackListing};
use crate::player::{
    backend::AudioBackend,
    clock::{is_known_duration, seek_fill_percent, time_display, RESET_DISPLAY},
    error::{PlaybackError, Result},
    session::{NowPlaying, PlaybackSession, PlaybackState},
};
use tracing::{debug, warn};

pub struct PlaybackController<B> {
    backend: B,
    locator: StreamLocator,
    session: PlaybackSession,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(backend: B, locator: StreamLocator, initial_volume: u8) -> Self {
        let mut controller = Self {
            backend,
            locator,
            session: PlaybackSession::default(),
        };
        controller.set_volume(initial_volume);
        controller
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load `track` from `listing`, replacing whatever was loaded before.
    ///
    /// The listing is kept as the navigation context, so next/previous always
    /// walk the album the track came from. With `autoplay` off the track is
    /// left paused at position zero.
    pub fn load(&mut self, listing: &TrackListing, track: &str, autoplay: bool) -> Result<()> {
        if track.trim().is_empty() {
            warn!(album = %listing.album, "refusing to load a track without a name");
            return Err(PlaybackError::MissingTrackName);
        }

        self.backend.pause();
        let url = self.locator.stream_url(&listing.album, track)?;
        self.backend.set_source(url.as_str());
        debug!(%url, autoplay, "loaded track");

        self.session.now_playing = Some(NowPlaying {
            track: track.to_string(),
            album: listing.album.clone(),
        });
        if self.session.listing != *listing {
            self.session.listing = listing.clone();
        }
        self.session.position = 0.0;
        self.session.duration = f64::NAN;
        self.session.time_display = RESET_DISPLAY.to_string();
        self.session.seek_fill = 0.0;
        self.session.state = PlaybackState::Paused;

        if autoplay {
            self.backend.play()?;
            self.session.state = PlaybackState::Playing;
        }
        Ok(())
    }

    /// Load the track at `index` of `listing`.
    pub fn load_index(
        &mut self,
        listing: &TrackListing,
        index: usize,
        autoplay: bool,
    ) -> Result<()> {
        let track = listing.get(index).unwrap_or_default().to_string();
        self.load(listing, &track, autoplay)
    }

    pub fn toggle_play_pause(&mut self) -> Result<()> {
        match self.session.state {
            PlaybackState::NoneLoaded => {}
            PlaybackState::Paused => {
                self.backend.play()?;
                self.session.state = PlaybackState::Playing;
            }
            PlaybackState::Playing => {
                self.backend.pause();
                self.session.state = PlaybackState::Paused;
            }
        }
        Ok(())
    }

    /// Follow the audio element's own play/pause events.
    pub fn sync_playing(&mut self, playing: bool) {
        if self.session.state == PlaybackState::NoneLoaded {
            return;
        }
        self.session.state = if playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
    }

    /// Jump to `fraction` (0.0..=1.0) of the track.
    pub fn seek(&mut self, fraction: f64) -> Result<()> {
        if self.session.state == PlaybackState::NoneLoaded {
            return Err(PlaybackError::NoTrackLoaded);
        }
        let duration = self.backend.duration();
        if !is_known_duration(duration) || !fraction.is_finite() {
            return Err(PlaybackError::DurationUnknown);
        }

        let position = fraction.clamp(0.0, 1.0) * duration;
        self.backend.set_current_time(position);
        self.refresh_clock(position, duration);
        Ok(())
    }

    /// Apply the volume control, 0-100.
    pub fn set_volume(&mut self, level: u8) {
        let level = level.min(100);
        let volume = f64::from(level) / 100.0;
        self.backend.set_volume(volume);
        self.session.volume_level = level;
        if volume > 0.0 {
            self.session.remembered_volume = Some(volume);
        }
        self.session.muted = volume == 0.0;
    }

    pub fn toggle_mute(&mut self) {
        let current = self.backend.volume();
        if current != 0.0 {
            self.session.remembered_volume = Some(current);
            self.backend.set_volume(0.0);
            self.session.muted = true;
            return;
        }

        let restored = self
            .session
            .remembered_volume
            .filter(|volume| *volume > 0.0)
            .unwrap_or_else(|| f64::from(self.session.volume_level) / 100.0);
        self.backend.set_volume(restored);
        self.session.muted = restored == 0.0;
    }

    pub fn volume(&self) -> f64 {
        self.backend.volume()
    }

    /// Position tick from the audio element.
    pub fn tick(&mut self) {
        let position = self.backend.current_time();
        let duration = self.backend.duration();
        self.refresh_clock(position, duration);
    }

    fn refresh_clock(&mut self, position: f64, duration: f64) {
        self.session.position = position;
        self.session.duration = duration;
        self.session.time_display = time_display(position, duration);
        self.session.seek_fill = seek_fill_percent(position, duration);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::MediaServerClient;
    use crate::player::backend::DetachedBackend;
    use crate::settings::PlayerSettings;

    pub(crate) fn controller() -> PlaybackController<DetachedBackend> {
        let settings = PlayerSettings::default().with_server_url("http://music.local");
        let locator = MediaServerClient::new(settings)
            .unwrap()
            .stream_locator()
            .unwrap();
        PlaybackController::new(DetachedBackend::default(), locator, 100)
    }

    pub(crate) fn listing() -> TrackListing {
        TrackListing::new(
            "Diljit",
            vec![
                "Lover".to_string(),
                "Born to Shine".to_string(),
                "G.O.A.T.".to_string(),
            ],
        )
    }

    #[test]
    fn starts_with_nothing_loaded() {
        let mut player = controller();
        assert_eq!(player.session().state, PlaybackState::NoneLoaded);
        player.toggle_play_pause().unwrap();
        assert_eq!(player.session().state, PlaybackState::NoneLoaded);
        assert!(player.backend().is_paused());
    }

    #[test]
    fn load_sets_source_and_plays() {
        let mut player = controller();
        player.load(&listing(), "Born to Shine", true).unwrap();

        assert_eq!(
            player.backend().source(),
            Some("http://music.local/songs/Diljit/Born%20to%20Shine.opus")
        );
        assert_eq!(player.session().state, PlaybackState::Playing);
        assert_eq!(player.session().current_track(), Some("Born to Shine"));
        assert_eq!(player.session().time_display, RESET_DISPLAY);
        assert!(!player.backend().is_paused());
    }

    #[test]
    fn load_without_autoplay_stays_paused() {
        let mut player = controller();
        player.load(&listing(), "Lover", false).unwrap();
        player.backend_mut().set_duration(180.0);
        player.backend_mut().advance(5.0);
        player.tick();

        assert_eq!(player.session().state, PlaybackState::Paused);
        assert_eq!(player.session().position, 0.0);
        assert_eq!(player.session().time_display, "0:00/3:00");
    }

    #[test]
    fn loading_a_new_track_stops_the_previous_one() {
        let mut player = controller();
        player.load(&listing(), "Lover", true).unwrap();
        player.backend_mut().set_duration(200.0);
        player.backend_mut().advance(30.0);

        player.load(&listing(), "G.O.A.T.", false).unwrap();
        assert!(player.backend().is_paused());
        assert_eq!(player.backend().current_time(), 0.0);
        assert_eq!(player.session().state, PlaybackState::Paused);
    }

    #[test]
    fn empty_track_name_is_rejected() {
        let mut player = controller();
        player.load(&listing(), "Lover", true).unwrap();

        let err = player.load(&listing(), "  ", true).unwrap_err();
        assert!(matches!(err, PlaybackError::MissingTrackName));
        assert_eq!(player.session().current_track(), Some("Lover"));
        assert_eq!(player.session().state, PlaybackState::Playing);
    }

    #[test]
    fn load_index_past_the_end_is_rejected() {
        let mut player = controller();
        let err = player.load_index(&listing(), 9, false).unwrap_err();
        assert!(matches!(err, PlaybackError::MissingTrackName));
        assert_eq!(player.session().state, PlaybackState::NoneLoaded);
    }

    #[test]
    fn toggle_switches_between_playing_and_paused() {
        let mut player = controller();
        player.load(&listing(), "Lover", false).unwrap();

        player.toggle_play_pause().unwrap();
        assert_eq!(player.session().state, PlaybackState::Playing);
        assert!(!player.backend().is_paused());

        player.toggle_play_pause().unwrap();
        assert_eq!(player.session().state, PlaybackState::Paused);
        assert!(player.backend().is_paused());
    }

    #[test]
    fn element_events_drive_state_once_loaded() {
        let mut player = controller();
        player.sync_playing(true);
        assert_eq!(player.session().state, PlaybackState::NoneLoaded);

        player.load(&listing(), "Lover", true).unwrap();
        player.sync_playing(false);
        assert_eq!(player.session().state, PlaybackState::Paused);
    }

    #[test]
    fn seek_uses_fraction_of_duration() {
        let mut player = controller();
        player.load(&listing(), "Lover", true).unwrap();
        player.backend_mut().set_duration(200.0);

        player.seek(0.5).unwrap();
        assert_eq!(player.backend().current_time(), 100.0);
        assert_eq!(player.session().seek_fill, 50.0);
        assert_eq!(player.session().time_display, "1:40/3:20");
    }

    #[test]
    fn seek_before_metadata_is_rejected() {
        let mut player = controller();
        player.load(&listing(), "Lover", true).unwrap();

        let err = player.seek(0.5).unwrap_err();
        assert!(matches!(err, PlaybackError::DurationUnknown));
        assert_eq!(player.backend().current_time(), 0.0);
    }

    #[test]
    fn tick_formats_position() {
        let mut player = controller();
        player.load(&listing(), "Lover", true).unwrap();
        player.backend_mut().set_duration(125.0);
        player.backend_mut().advance(65.0);
        player.tick();

        assert_eq!(player.session().time_display, "1:05/2:05");
        assert_eq!(player.session().seek_fill, 52.0);
    }

    #[test]
    fn volume_is_scaled_and_zero_shows_muted() {
        let mut player = controller();
        player.set_volume(40);
        assert_eq!(player.volume(), 0.4);
        assert!(!player.session().muted);

        player.set_volume(0);
        assert_eq!(player.volume(), 0.0);
        assert!(player.session().muted);
    }

    #[test]
    fn unmute_after_zero_restores_last_nonzero_volume() {
        let mut player = controller();
        player.set_volume(70);
        player.set_volume(0);

        player.toggle_mute();
        assert_eq!(player.volume(), 0.7);
        assert!(!player.session().muted);
    }

    #[test]
    fn mute_round_trip_keeps_volume() {
        let mut player = controller();
        player.set_volume(35);

        player.toggle_mute();
        assert_eq!(player.volume(), 0.0);
        assert!(player.session().muted);

        player.toggle_mute();
        assert_eq!(player.volume(), 0.35);
        assert!(!player.session().muted);
    }
}
