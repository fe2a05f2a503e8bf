use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, Feed};

#[derive(Debug, Parser)]
#[command(name = "catbook", version, about = "Browse cat pictures in the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Feed profile to load (overrides defaults.active)
    #[arg(long, value_name = "NAME")]
    pub feed: Option<String>,

    /// Override the feed URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the JSON field holding the image array
    #[arg(long, value_name = "KEY")]
    pub payload_key: Option<String>,

    /// Fetch once and print image URLs instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Print dispatched actions as JSON lines (requires --print)
    #[arg(long, requires = "print")]
    pub actions: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Picks the feed profile and applies `--url` / `--payload-key`.
    pub fn resolve_feed(&self, config: &Config) -> Result<Feed, ConfigError> {
        let mut feed = config.resolve_feed(self.feed.as_deref())?;
        if let Some(url) = &self.url {
            feed.url = url.clone();
        }
        if let Some(key) = &self.payload_key {
            feed.payload_key = key.clone();
        }
        Ok(feed)
    }
}
