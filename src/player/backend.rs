//! Audio output seam.
//!
//! The playback controller drives whatever implements [`AudioBackend`]. The
//! browser build wraps the page's `<audio>` element; host builds use
//! [`DetachedBackend`], which only keeps the numbers.

use crate::player::PlaybackError;

pub trait AudioBackend {
    fn set_source(&mut self, url: &str);
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Track length in seconds; NaN until the media metadata has loaded.
    fn duration(&self) -> f64;
    /// Output volume in 0.0..=1.0.
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// In-memory backend with no audible output.
#[derive(Debug, Clone)]
pub struct DetachedBackend {
    source: Option<String>,
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
}

impl Default for DetachedBackend {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
        }
    }
}

impl DetachedBackend {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Stands in for the media element reporting its metadata.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds;
    }

    /// Stands in for playback progressing.
    pub fn advance(&mut self, seconds: f64) {
        if !self.paused {
            self.current_time += seconds;
        }
    }
}

impl AudioBackend for DetachedBackend {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.current_time = 0.0;
        self.duration = f64::NAN;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.source.is_none() {
            return Err(PlaybackError::Backend("no source set".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Backend over the page's single `<audio>` element.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct HtmlAudioBackend {
    audio: web_sys::HtmlAudioElement,
}

#[cfg(target_arch = "wasm32")]
impl HtmlAudioBackend {
    pub fn new(audio: web_sys::HtmlAudioElement) -> Self {
        Self { audio }
    }
}

#[cfg(target_arch = "wasm32")]
impl AudioBackend for HtmlAudioBackend {
    fn set_source(&mut self, url: &str) {
        self.audio.set_src(url);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let promise = self
            .audio
            .play()
            .map_err(|err| PlaybackError::Backend(format!("{err:?}")))?;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!(error = ?err, "audio element refused to play");
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            tracing::warn!(error = ?err, "audio element refused to pause");
        }
    }

    fn is_paused(&self) -> bool {
        self.audio.paused()
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume.clamp(0.0, 1.0));
    }
}
