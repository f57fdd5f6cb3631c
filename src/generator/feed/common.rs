//! Common utilities for feed generation.

use super::error::FeedError;
use crate::{channel::PUBLISH_OFFSET, log, posts::Entry};
use chrono::{DateTime, FixedOffset};
use std::{fs, path::Path};

/// Value for the `<generator>` element of both formats.
pub const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// RFC 2822 timestamp with a two-digit day, e.g. `Tue, 01 Nov 2022 00:00:00 -0700`.
pub fn rfc2822(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Publish timestamp of `entry` in the fixed publish offset.
pub fn published_at(entry: &Entry) -> Result<DateTime<FixedOffset>, FeedError> {
    entry
        .published
        .at_midnight(*PUBLISH_OFFSET)
        .map_err(|e| FeedError::InvalidDate {
            id: entry.id,
            date: entry.published.to_string(),
            reason: e.to_string(),
        })
}

/// Write rendered XML to `path`, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_feed(module: &str, path: &Path, xml: &str) -> Result<(), FeedError> {
    fs::write(path, xml).map_err(|e| FeedError::Write(path.to_path_buf(), e))?;
    log!(module; "{}", path.display());
    Ok(())
}
