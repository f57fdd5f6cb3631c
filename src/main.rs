//! homepage-feed - generates the victorzhou.dev RSS and Atom feeds.

mod channel;
mod cli;
mod config;
mod generator;
mod logger;
mod posts;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::FeedConfig;
use generator::{Feed, feed::build_feeds};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FeedConfig::from_env()?;
    let feed = Feed::assemble();
    debug!("feed"; "assembled {} posts", feed.entries.len());

    let written = build_feeds(&config, &feed)?;
    if written.is_empty() {
        debug!("feed"; "no output paths configured, nothing written");
    }

    Ok(())
}
