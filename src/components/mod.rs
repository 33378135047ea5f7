//! The components module contains all shared components for our app.

mod albums;
mod app;
pub mod audio_manager;
mod icons;
mod player;
mod sidebar;
mod track_list;

pub use albums::*;
pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use player::*;
pub use sidebar::*;
pub use track_list::*;
