use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use catbook::cli::Cli;
use catbook::config::ConfigError;
use catbook::feed::FeedClient;
use catbook::headless::{print_feed, PrintMode};
use catbook::logging::init_tracing;
use catbook::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        if let Some(ConfigError::FeedNotFound { available, .. }) =
            err.downcast_ref::<ConfigError>()
        {
            if available.is_empty() {
                eprintln!("No feeds configured");
            } else {
                eprintln!("Available feeds: {}", available.join(", "));
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let feed = cli.resolve_feed(&config)?;
    tracing::info!(feed = %feed.name, url = %feed.url, "Starting catbook");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.print {
        let client = FeedClient::new(&feed)?;
        let mode = if cli.actions {
            PrintMode::Actions(feed.actions)
        } else {
            PrintMode::Urls
        };
        let mut stdout = io::stdout().lock();
        rt.block_on(print_feed(&client, mode, &mut stdout))?;
        return Ok(());
    }

    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    runtime::run(feed, tick_rate, rt.handle())
}
