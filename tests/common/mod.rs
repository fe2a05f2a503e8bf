//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use catbook::config::Feed;
use catbook::feed::CatImage;
use ratatui::buffer::Buffer;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TWO_CATS: &str =
    r#"{"images": [{"url": "www.example.com/cat1"}, {"url": "www.example.com/cat2"}]}"#;

pub fn cats(urls: &[&str]) -> Vec<CatImage> {
    urls.iter().map(|url| CatImage::new(*url)).collect()
}

/// A feed profile pointing at `url` with the default payload key.
pub fn feed_for(url: &str) -> Feed {
    Feed {
        name: "test".to_string(),
        display_name: "Test Feed".to_string(),
        url: url.to_string(),
        ..Feed::curriculum()
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Rows of a rendered buffer as plain strings.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(needle))
}

/// An address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cats.json", addr)
}
