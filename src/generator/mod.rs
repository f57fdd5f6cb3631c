//! Feed assembly and output.
//!
//! - [`Feed`]: the channel plus every post, in section order
//! - [`feed`]: RSS 2.0 / Atom 1.0 rendering and file output
//!
//! Both formats render from the same assembled `Feed`, so they always list
//! the same posts in the same order.

pub mod feed;

use crate::{
    channel::{CHANNEL, Channel, PUBLISH_OFFSET},
    debug, debug_do,
    posts::{self, Entry, SECTIONS},
};
use chrono::{DateTime, FixedOffset};

/// Channel metadata plus the ordered list of entries to publish.
#[derive(Debug, Clone)]
pub struct Feed<'a> {
    pub channel: &'a Channel,
    pub entries: Vec<&'a Entry>,
}

impl Feed<'static> {
    /// Assemble the site feed from the static post tables.
    pub fn assemble() -> Self {
        debug_do! {
            for section in SECTIONS {
                debug!("feed"; "{}: {} posts", section.name, section.entries.len());
            }
        }
        Self::new(&CHANNEL, posts::all_entries().collect())
    }
}

impl<'a> Feed<'a> {
    pub fn new(channel: &'a Channel, entries: Vec<&'a Entry>) -> Self {
        Self { channel, entries }
    }

    /// Newest publish timestamp, or the Unix epoch for an empty feed.
    ///
    /// Entries whose date does not resolve are ignored here; rendering
    /// reports them.
    pub fn latest_published(&self) -> DateTime<FixedOffset> {
        self.entries
            .iter()
            .filter_map(|entry| entry.published.at_midnight(*PUBLISH_OFFSET).ok())
            .max()
            .unwrap_or_default()
    }
}
