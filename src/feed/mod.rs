//! Remote cat picture feed.
//!
//! One GET, one JSON body, one array of image records. Failures are typed
//! so the state container can surface them instead of hanging in `Loading`.

mod client;
mod error;
mod model;

pub use client::{parse_images, FeedClient};
pub use error::FeedError;
pub use model::CatImage;
