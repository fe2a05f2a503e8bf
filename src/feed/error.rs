use thiserror::Error;

/// Errors that can occur while fetching the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS or body transfer failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("Feed '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body is not JSON, or the image array has the wrong shape.
    #[error("Malformed feed body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Body is JSON but has no field under the configured payload key.
    #[error("Feed body has no '{key}' field")]
    MissingKey { key: String },
}

impl FeedError {
    /// Short label for the header bar.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Client(_) => "client",
            FeedError::Transport { .. } => "network",
            FeedError::Status { .. } => "http status",
            FeedError::Decode(_) => "malformed body",
            FeedError::MissingKey { .. } => "missing payload",
        }
    }
}
