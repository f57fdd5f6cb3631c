//! Atom 1.0 feed generation.

use super::{
    common::{GENERATOR, published_at, write_feed},
    error::FeedError,
};
use crate::{generator::Feed, posts::Entry};
use atom_syndication::{
    EntryBuilder, FeedBuilder, GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text,
};
use std::path::Path;

/// Build Atom 1.0 feed and write it to `path`.
pub fn build_atom(feed: &Feed<'_>, path: &Path) -> Result<(), FeedError> {
    let xml = render_atom(feed)?;
    write_feed("atom", path, &xml)
}

struct AtomFeed<'f, 'a> {
    feed: &'f Feed<'a>,
}

impl<'f, 'a> AtomFeed<'f, 'a> {
    const fn new(feed: &'f Feed<'a>) -> Self {
        Self { feed }
    }

    fn into_xml(self) -> Result<String, FeedError> {
        let channel = self.feed.channel;

        let entries = self
            .feed
            .entries
            .iter()
            .map(|entry| entry_to_atom_entry(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let author: Person = PersonBuilder::default()
            .name(channel.author.name)
            .uri(Some(channel.author.uri.to_string()))
            .build();

        let self_link: Link = LinkBuilder::default()
            .href(channel.self_link)
            .rel("self".to_string())
            .build();

        let feed = FeedBuilder::default()
            .title(Text::plain(channel.title))
            .id(channel.id)
            .updated(self.feed.latest_published())
            .authors(vec![author])
            .links(vec![self_link])
            .logo(Some(channel.logo.to_string()))
            .subtitle(Some(Text::plain(channel.subtitle)))
            .generator(Some(
                GeneratorBuilder::default()
                    .value(GENERATOR)
                    .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                    .build(),
            ))
            .lang(Some(channel.language.to_string()))
            .entries(entries)
            .build();

        Ok(feed.to_string())
    }
}

/// Render the feed as an Atom 1.0 document.
pub fn render_atom(feed: &Feed<'_>) -> Result<String, FeedError> {
    AtomFeed::new(feed).into_xml()
}

fn entry_to_atom_entry(entry: &Entry) -> Result<atom_syndication::Entry, FeedError> {
    let published = published_at(entry)?;

    let links: Vec<Link> = entry
        .links
        .iter()
        .map(|link| {
            LinkBuilder::default()
                .href(link.href)
                .rel(link.rel.as_str())
                .build()
        })
        .collect();

    Ok(EntryBuilder::default()
        .title(Text::plain(entry.title))
        .id(entry.id)
        .updated(published)
        .published(Some(published))
        .links(links)
        .build())
}
