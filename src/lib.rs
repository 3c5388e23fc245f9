//! Photo-browsing core: an Unsplash API gateway, a last-writer-wins photo
//! feed, and a process-lifetime in-memory favorites registry.

pub mod favorites;
pub mod feed;
pub mod gateway;
pub mod unsplash;

pub use favorites::Favorites;
pub use feed::Feed;
pub use gateway::PhotoGateway;
pub use unsplash::{Client, Error, Photo, Result};
