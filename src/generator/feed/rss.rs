//! RSS 2.0 feed generation.

use super::{
    common::{GENERATOR, published_at, rfc2822, write_feed},
    error::FeedError,
};
use crate::{generator::Feed, posts::Entry};
use atom_syndication::LinkBuilder;
use rss::{
    ChannelBuilder, GuidBuilder, ImageBuilder, ItemBuilder, extension::atom::AtomExtensionBuilder,
    validation::Validate,
};
use std::path::Path;

/// Build RSS 2.0 feed and write it to `path`.
pub fn build_rss(feed: &Feed<'_>, path: &Path) -> Result<(), FeedError> {
    let xml = render_rss(feed)?;
    write_feed("rss", path, &xml)
}

struct RssFeed<'f, 'a> {
    feed: &'f Feed<'a>,
}

impl<'f, 'a> RssFeed<'f, 'a> {
    const fn new(feed: &'f Feed<'a>) -> Self {
        Self { feed }
    }

    fn into_xml(self) -> Result<String, FeedError> {
        let channel = self.feed.channel;

        let items = self
            .feed
            .entries
            .iter()
            .map(|entry| entry_to_rss_item(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let image = ImageBuilder::default()
            .url(channel.logo)
            .title(channel.title)
            .link(channel.id)
            .build();

        let self_link = AtomExtensionBuilder::default()
            .link(
                LinkBuilder::default()
                    .href(channel.self_link)
                    .rel("self")
                    .build(),
            )
            .build();

        let channel = ChannelBuilder::default()
            .title(channel.title)
            .link(channel.id)
            .description(channel.subtitle)
            .language(Some(channel.language.to_string()))
            .docs(Some(channel.docs.to_string()))
            .generator(Some(GENERATOR.to_string()))
            .last_build_date(Some(rfc2822(&self.feed.latest_published())))
            .image(Some(image))
            .atom_ext(Some(self_link))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| FeedError::InvalidRss(e.to_string()))?;
        Ok(channel.to_string())
    }
}

/// Render the feed as an RSS 2.0 document.
pub fn render_rss(feed: &Feed<'_>) -> Result<String, FeedError> {
    RssFeed::new(feed).into_xml()
}

fn entry_to_rss_item(entry: &Entry) -> Result<rss::Item, FeedError> {
    let pub_date = rfc2822(&published_at(entry)?);

    Ok(ItemBuilder::default()
        .title(Some(entry.title.to_string()))
        .link(Some(entry.primary_link().to_string()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(true)
                .value(entry.id)
                .build(),
        ))
        .pub_date(Some(pub_date))
        .build())
}
