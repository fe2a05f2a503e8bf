use serde::{Deserialize, Serialize};

use crate::ui::cats::ActionVocabulary;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub defaults: Defaults,
    #[serde(default = "default_feeds")]
    pub feeds: Vec<Feed>,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Name of the feed used when `--feed` is not given.
    pub active: String,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// A cat picture endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    /// Unique identifier (e.g., "curriculum", "local").
    pub name: String,
    /// Display name in the header. Falls back to `name` when empty.
    #[serde(default)]
    pub display_name: String,
    /// Full URL of the JSON document.
    pub url: String,
    /// Top-level field holding the image array (default: "images").
    #[serde(default = "default_payload_key")]
    pub payload_key: String,
    /// Action tags used in logs and `--actions` output (default: "slice").
    #[serde(default)]
    pub actions: ActionVocabulary,
}

impl Feed {
    pub fn title(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }

    /// The hosted curriculum cat API.
    pub fn curriculum() -> Self {
        Self {
            name: "curriculum".to_string(),
            display_name: "Cat API".to_string(),
            url: "https://learn-co-curriculum.github.io/cat-api/cats.json".to_string(),
            payload_key: default_payload_key(),
            actions: ActionVocabulary::Slice,
        }
    }

    /// A local json-server style fixture.
    pub fn local() -> Self {
        Self {
            name: "local".to_string(),
            display_name: "Local".to_string(),
            url: "http://localhost:3000/db".to_string(),
            payload_key: default_payload_key(),
            actions: ActionVocabulary::Legacy,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_payload_key() -> String {
    "images".to_string()
}

fn default_feeds() -> Vec<Feed> {
    vec![Feed::curriculum(), Feed::local()]
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            active: "curriculum".to_string(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            feeds: default_feeds(),
        }
    }
}
