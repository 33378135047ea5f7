use serde::{Deserialize, Serialize};

/// Contents of an album's `info.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlbumInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Album {
    /// Folder name under the songs root; the album's key.
    pub folder: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "coverUrl")]
    pub cover_url: String,
}

impl Album {
    pub fn from_info(folder: impl Into<String>, info: AlbumInfo, cover_url: String) -> Self {
        Self {
            folder: folder.into(),
            title: info.title,
            description: info.description,
            cover_url,
        }
    }
}

/// Ordered track names of one album, in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackListing {
    pub album: String,
    pub tracks: Vec<String>,
}

impl TrackListing {
    pub fn new(album: impl Into<String>, tracks: Vec<String>) -> Self {
        Self {
            album: album.into(),
            tracks,
        }
    }

    pub fn position(&self, track: &str) -> Option<usize> {
        self.tracks.iter().position(|name| name == track)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_missing_description_defaults_to_empty() {
        let info: AlbumInfo = serde_json::from_str(r#"{"title":"Moonchild Era"}"#).unwrap();
        assert_eq!(info.title, "Moonchild Era");
        assert!(info.description.is_empty());
    }

    #[test]
    fn listing_position_is_exact_match() {
        let listing = TrackListing::new(
            "Diljit",
            vec!["Lover".to_string(), "Lover (Remix)".to_string()],
        );
        assert_eq!(listing.position("Lover (Remix)"), Some(1));
        assert_eq!(listing.position("lover"), None);
        assert_eq!(listing.get(5), None);
    }
}
