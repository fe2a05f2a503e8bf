use serde::{Deserialize, Serialize};

/// One cat picture as delivered by the feed.
///
/// Identity is positional. Extra fields on the wire record (such as `id`)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatImage {
    pub url: String,
}

impl CatImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
