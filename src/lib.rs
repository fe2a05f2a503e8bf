pub mod cli;
pub mod config;
pub mod feed;
pub mod headless;
pub mod logging;
pub mod ui;
