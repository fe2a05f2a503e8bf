use reqwest::Client;

use crate::config::Feed;
use crate::feed::error::FeedError;
use crate::feed::model::CatImage;
use crate::ui::cats::CatsIntent;

const USER_AGENT: &str = concat!("catbook/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one feed endpoint.
///
/// No retries, no request timeout and no cancellation: a fetch either
/// completes or is abandoned with the process.
pub struct FeedClient {
    client: Client,
    url: String,
    payload_key: String,
}

impl FeedClient {
    pub fn new(feed: &Feed) -> Result<Self, FeedError> {
        Self::from_parts(&feed.url, &feed.payload_key)
    }

    pub fn from_parts(
        url: impl Into<String>,
        payload_key: impl Into<String>,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FeedError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
            payload_key: payload_key.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn payload_key(&self) -> &str {
        &self.payload_key
    }

    /// Performs the GET and decodes the image array.
    pub async fn fetch(&self) -> Result<Vec<CatImage>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FeedError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FeedError::Transport {
                url: self.url.clone(),
                source,
            })?;

        parse_images(&body, &self.payload_key)
    }

    /// Runs a full fetch cycle against the state container.
    ///
    /// `Loading` is dispatched before the request is issued, then exactly one
    /// of `Loaded` or `Failed`. The error is also returned so callers can
    /// report it outside the store.
    pub async fn fetch_cats<D>(&self, mut dispatch: D) -> Result<usize, FeedError>
    where
        D: FnMut(CatsIntent) + Send,
    {
        dispatch(CatsIntent::Loading);
        tracing::debug!(url = %self.url, "Fetching cats");

        match self.fetch().await {
            Ok(images) => {
                let count = images.len();
                tracing::info!(url = %self.url, count, "Cats loaded");
                dispatch(CatsIntent::Loaded { images });
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    url = %self.url,
                    kind = err.kind(),
                    error = %err,
                    "Cat fetch failed"
                );
                dispatch(CatsIntent::Failed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }
}

/// Decodes `{ "<payload_key>": [{ "url": ... }, ...] }`.
///
/// An empty array is a valid, empty feed.
pub fn parse_images(body: &[u8], payload_key: &str) -> Result<Vec<CatImage>, FeedError> {
    let mut value: serde_json::Value = serde_json::from_slice(body).map_err(FeedError::Decode)?;

    let images = value
        .get_mut(payload_key)
        .map(serde_json::Value::take)
        .ok_or_else(|| FeedError::MissingKey {
            key: payload_key.to_string(),
        })?;

    serde_json::from_value(images).map_err(FeedError::Decode)
}
