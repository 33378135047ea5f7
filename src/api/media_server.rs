use crate::api::listing::{album_folders, track_names};
use crate::api::models::*;
use crate::settings::{page_origin, PlayerSettings, SETTINGS_DOCUMENT};
use futures_util::future::join_all;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Origin used when neither settings nor the page provide one.
const FALLBACK_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Fetches text documents from the file server.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_text(&self, url: &Url) -> Result<String, ApiError>;
}

/// `reqwest` transport shared by all clients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn get_text(&self, url: &Url) -> Result<String, ApiError> {
        let request_error = |source| ApiError::Request {
            url: url.to_string(),
            source,
        };
        let response = HTTP_CLIENT
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_error)
    }
}

/// Builds audio addresses without holding on to a client.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamLocator {
    root: Url,
    extension: String,
}

impl StreamLocator {
    /// `{root}/{folder}/{track}.{extension}`, folder and track percent-encoded.
    pub fn stream_url(&self, folder: &str, track: &str) -> Result<Url, url::ParseError> {
        self.root.join(&format!(
            "{}/{}.{}",
            urlencoding::encode(folder),
            urlencoding::encode(track),
            self.extension
        ))
    }
}

/// Client for the static file server holding the songs tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaServerClient<T = HttpTransport> {
    settings: PlayerSettings,
    origin: Url,
    transport: T,
}

impl MediaServerClient<HttpTransport> {
    pub fn new(settings: PlayerSettings) -> Result<Self, ApiError> {
        Self::with_transport(settings, HttpTransport)
    }
}

impl<T: Transport> MediaServerClient<T> {
    pub fn with_transport(settings: PlayerSettings, transport: T) -> Result<Self, ApiError> {
        let origin = resolve_origin(&settings)?;
        Ok(Self {
            settings,
            origin,
            transport,
        })
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// `{origin}{root}/`
    pub fn root_url(&self) -> Result<Url, ApiError> {
        Ok(self
            .origin
            .join(&format!("{}/", self.settings.normalized_root()))?)
    }

    /// `{origin}{root}/{folder}/`
    pub fn album_url(&self, folder: &str) -> Result<Url, ApiError> {
        Ok(self
            .root_url()?
            .join(&format!("{}/", urlencoding::encode(folder)))?)
    }

    /// Address of a track's audio resource.
    pub fn stream_url(&self, folder: &str, track: &str) -> Result<Url, ApiError> {
        Ok(self.stream_locator()?.stream_url(folder, track)?)
    }

    pub fn stream_locator(&self) -> Result<StreamLocator, ApiError> {
        Ok(StreamLocator {
            root: self.root_url()?,
            extension: self.settings.extension().to_string(),
        })
    }

    pub fn cover_url(&self, folder: &str) -> Result<Url, ApiError> {
        Ok(self
            .album_url(folder)?
            .join(&urlencoding::encode(&self.settings.cover_file))?)
    }

    fn info_url(&self, folder: &str) -> Result<Url, ApiError> {
        Ok(self
            .album_url(folder)?
            .join(&urlencoding::encode(&self.settings.info_file))?)
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &Url) -> Result<D, ApiError> {
        let body = self.transport.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Json {
            url: url.to_string(),
            source,
        })
    }

    /// Album folders linked from the songs root listing.
    pub async fn list_album_folders(&self) -> Result<Vec<String>, ApiError> {
        let root = self.root_url()?;
        let html = self.transport.get_text(&root).await?;
        Ok(album_folders(&root, &html))
    }

    pub async fn get_album(&self, folder: &str) -> Result<Album, ApiError> {
        let info: AlbumInfo = self.get_json(&self.info_url(folder)?).await?;
        let cover = self.cover_url(folder)?;
        Ok(Album::from_info(folder, info, cover.to_string()))
    }

    /// Every album whose metadata loads. A failing album is logged and left
    /// out without affecting the others.
    pub async fn get_albums(&self) -> Result<Vec<Album>, ApiError> {
        let folders = self.list_album_folders().await?;
        debug!(count = folders.len(), "discovered album folders");

        let results = join_all(folders.iter().map(|folder| self.get_album(folder))).await;
        let albums = folders
            .iter()
            .zip(results)
            .filter_map(|(folder, result)| match result {
                Ok(album) => Some(album),
                Err(err) => {
                    warn!(folder = %folder, error = %err, "skipping album without metadata");
                    None
                }
            })
            .collect();

        Ok(albums)
    }

    /// Tracks of one album in server order.
    pub async fn get_tracks(&self, folder: &str) -> Result<TrackListing, ApiError> {
        let url = self.album_url(folder)?;
        let html = self.transport.get_text(&url).await?;
        let tracks = track_names(&url, &html, self.settings.extension());
        debug!(folder = %folder, count = tracks.len(), "listed tracks");
        Ok(TrackListing::new(folder, tracks))
    }
}

fn resolve_origin(settings: &PlayerSettings) -> Result<Url, ApiError> {
    let origin = if settings.server_url.trim().is_empty() {
        page_origin().unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
    } else {
        settings.server_url.trim().to_string()
    };
    Ok(Url::parse(&origin)?)
}

/// Settings from `songshelf.json` at the page origin, or the defaults when
/// the document is missing or malformed.
pub async fn load_settings() -> PlayerSettings {
    load_settings_with(&HttpTransport).await
}

pub async fn load_settings_with<T: Transport>(transport: &T) -> PlayerSettings {
    match fetch_settings(transport).await {
        Ok(settings) => settings,
        Err(err) => {
            debug!(error = %err, "using default settings");
            PlayerSettings::default()
        }
    }
}

async fn fetch_settings<T: Transport>(transport: &T) -> Result<PlayerSettings, ApiError> {
    let url = resolve_origin(&PlayerSettings::default())?.join(SETTINGS_DOCUMENT)?;
    let body = transport.get_text(&url).await?;
    serde_json::from_str(&body).map_err(|source| ApiError::Json {
        url: url.to_string(),
        source,
    })
}
