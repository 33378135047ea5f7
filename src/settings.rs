use serde::{Deserialize, Serialize};

/// Document fetched from the page origin to override the defaults below.
pub const SETTINGS_DOCUMENT: &str = "songshelf.json";

/// Player settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Origin of the static file server. Empty means the page origin.
    pub server_url: String,
    pub songs_root: String,
    pub audio_extension: String,
    pub info_file: String,
    pub cover_file: String,
    /// Album whose tracks are listed before the user picks one.
    pub default_album: String,
    /// Index into the default album loaded (paused) on startup.
    pub initial_track: usize,
    /// Volume control position on startup, 0-100.
    pub initial_volume: u8,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            songs_root: "/songs".to_string(),
            audio_extension: "opus".to_string(),
            info_file: "info.json".to_string(),
            cover_file: "cover.jpg".to_string(),
            default_album: "Diljit".to_string(),
            initial_track: 2,
            initial_volume: 100,
        }
    }
}

impl PlayerSettings {
    /// Songs root with exactly one leading slash and no trailing slash.
    pub fn normalized_root(&self) -> String {
        let trimmed = self.songs_root.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.audio_extension.trim().trim_start_matches('.')
    }

    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Origin the page was served from, used when no server url is configured.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let settings: PlayerSettings =
            serde_json::from_str(r#"{ "default_album": "Lofi", "initial_volume": 40 }"#).unwrap();
        assert_eq!(settings.default_album, "Lofi");
        assert_eq!(settings.initial_volume, 40);
        assert_eq!(settings.songs_root, "/songs");
        assert_eq!(settings.audio_extension, "opus");
        assert_eq!(settings.initial_track, 2);
    }

    #[test]
    fn root_is_normalized() {
        let mut settings = PlayerSettings::default();
        settings.songs_root = "music/".to_string();
        assert_eq!(settings.normalized_root(), "/music");
        settings.songs_root = "/".to_string();
        assert_eq!(settings.normalized_root(), "");
    }

    #[test]
    fn extension_drops_leading_dot() {
        let mut settings = PlayerSettings::default();
        settings.audio_extension = ".mp3".to_string();
        assert_eq!(settings.extension(), "mp3");
    }

    #[test]
    fn server_url_trailing_slash_is_trimmed() {
        let settings = PlayerSettings::default().with_server_url("http://localhost:8080/");
        assert_eq!(settings.server_url, "http://localhost:8080");
    }
}
