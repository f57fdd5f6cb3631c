//! Channel-level metadata shared by the RSS and Atom outputs.

use chrono::FixedOffset;
use std::sync::LazyLock;

/// Offset every post date is published in (UTC-07:00).
pub const PUBLISH_OFFSET_SECS: i32 = -7 * 3600;

/// The fixed offset posts are dated in, resolved once per process.
pub static PUBLISH_OFFSET: LazyLock<FixedOffset> =
    LazyLock::new(|| FixedOffset::east_opt(PUBLISH_OFFSET_SECS).unwrap());

/// A person credited on the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub uri: &'static str,
}

/// Feed-level metadata, distinct from individual entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Site identifier, also used as the RSS channel link.
    pub id: &'static str,
    pub title: &'static str,
    pub author: Author,
    /// Atom `rel="self"` link.
    pub self_link: &'static str,
    pub logo: &'static str,
    /// Atom subtitle and RSS description.
    pub subtitle: &'static str,
    pub language: &'static str,
    /// RSS `<docs>` URI.
    pub docs: &'static str,
}

pub const CHANNEL: Channel = Channel {
    id: "https://www.victorzhou.dev/",
    title: "Victor Zhou",
    author: Author {
        name: "Victor Zhou",
        uri: "https://www.victorzhou.dev/",
    },
    self_link: "https://www.victorzhou.dev/",
    logo: "https://cdn.victorzhou.dev/img/Icon+-+300x300.jpg",
    subtitle: "Victor Zhou's homepages",
    language: "en",
    docs: "https://www.rssboard.org/rss-specification",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_offset() {
        assert_eq!(PUBLISH_OFFSET.local_minus_utc(), -25200);
        assert_eq!(PUBLISH_OFFSET.to_string(), "-07:00");
    }

    #[test]
    fn test_channel_links_are_https() {
        for uri in [CHANNEL.id, CHANNEL.self_link, CHANNEL.logo, CHANNEL.docs, CHANNEL.author.uri] {
            assert!(uri.starts_with("https://"), "{uri}");
        }
    }
}
