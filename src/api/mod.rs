pub mod listing;
pub mod media_server;
pub mod models;

pub use media_server::*;
pub use models::*;
