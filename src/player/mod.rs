pub mod backend;
pub mod clock;
pub mod controller;
pub mod error;
pub mod navigation;
pub mod selection;
pub mod session;

pub use backend::*;
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use selection::{AlbumSelection, SelectionTicket};
pub use session::{NowPlaying, PlaybackSession, PlaybackState};

/// Backend the UI drives: the page's `<audio>` element in the browser.
#[cfg(target_arch = "wasm32")]
pub type ActiveBackend = HtmlAudioBackend;

#[cfg(not(target_arch = "wasm32"))]
pub type ActiveBackend = DetachedBackend;
