mod creator;
mod photo;
mod search;

pub use creator::Creator;
pub use photo::{Location, Photo, Place, Position};
pub use search::SearchResults;
