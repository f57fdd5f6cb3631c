//! Feed generation (RSS, Atom).
//!
//! Serializes the assembled [`Feed`] into:
//!
//! - **RSS 2.0**: written to `RSS_OUTPUT_PATH`
//! - **Atom 1.0**: written to `ATOM_OUTPUT_PATH`
//!
//! A format whose path is not configured is skipped.

use crate::{
    config::{FeedConfig, FeedFormat},
    debug,
    generator::Feed,
};
use std::path::PathBuf;

pub mod atom;
mod common;
pub mod error;
pub mod rss;

pub use error::FeedError;

/// Write every configured feed format. Returns the paths written, in order.
pub fn build_feeds(config: &FeedConfig, feed: &Feed<'_>) -> Result<Vec<PathBuf>, FeedError> {
    let mut written = Vec::with_capacity(FeedFormat::ALL.len());

    for format in FeedFormat::ALL {
        let Some(path) = config.output_path(format) else {
            debug!(format.name(); "{} not set, skipping", format.env_var());
            continue;
        };

        match format {
            FeedFormat::Rss => rss::build_rss(feed, path)?,
            FeedFormat::Atom => atom::build_atom(feed, path)?,
        }
        written.push(path.to_path_buf());
    }

    Ok(written)
}
