//! Post metadata published in the feeds.
//!
//! Posts are hand-authored `const` tables, one file per topical section:
//!
//! - **languages**: notes from learning languages
//! - **rants**: opinions, loosely held
//! - **transit**: trains, buses, and the agencies that run them
//! - **software**: software engineering
//! - **travel**: trip reports
//!
//! Sections are appended in the order of [`SECTIONS`]; entries keep the order
//! they are written in. Nothing here is sorted by date.

use crate::utils::date::PublishDate;

/// Build an [`Entry`] from literals.
///
/// With no link list the entry links to itself with `rel="self"`.
///
/// ```ignore
/// post!("https://example.com/a.html", "A", (2020, 7, 20));
/// post!("https://example.com/b.html", "B", (2022, 11, 1), [
///     SelfLink "https://example.com/b.html",
///     Alternate "https://example.com/b_plain.html",
/// ]);
/// ```
macro_rules! post {
    ($id:literal, $title:literal, ($y:literal, $m:literal, $d:literal)) => {
        $crate::posts::post!($id, $title, ($y, $m, $d), [SelfLink $id])
    };
    ($id:literal, $title:literal, ($y:literal, $m:literal, $d:literal), [$($rel:ident $href:literal),+ $(,)?]) => {
        $crate::posts::Entry {
            id: $id,
            title: $title,
            links: &[$($crate::posts::EntryLink {
                href: $href,
                rel: $crate::posts::LinkRel::$rel,
            }),+],
            published: $crate::utils::date::PublishDate::ymd($y, $m, $d),
        }
    };
}
pub(crate) use post;

mod languages;
mod rants;
mod software;
mod transit;
mod travel;

/// Relation of an entry link to the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRel {
    /// `rel="self"`: the canonical page for the entry.
    SelfLink,
    /// `rel="alternate"`: another rendering of the same post.
    Alternate,
}

impl LinkRel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLink => "self",
            Self::Alternate => "alternate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLink {
    pub href: &'static str,
    pub rel: LinkRel,
}

/// One published post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Stable, unique absolute URI.
    pub id: &'static str,
    pub title: &'static str,
    /// At least one link.
    pub links: &'static [EntryLink],
    pub published: PublishDate,
}

impl Entry {
    /// Link used where a format allows only one: the `rel="self"` link,
    /// falling back to the first link, then to the id.
    pub fn primary_link(&self) -> &'static str {
        self.links
            .iter()
            .find(|link| link.rel == LinkRel::SelfLink)
            .or_else(|| self.links.first())
            .map_or(self.id, |link| link.href)
    }
}

/// A topical group of posts.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub entries: &'static [Entry],
}

/// All sections, in feed order.
pub const SECTIONS: &[Section] = &[
    Section {
        name: "languages",
        entries: languages::ENTRIES,
    },
    Section {
        name: "rants",
        entries: rants::ENTRIES,
    },
    Section {
        name: "transit",
        entries: transit::ENTRIES,
    },
    Section {
        name: "software",
        entries: software::ENTRIES,
    },
    Section {
        name: "travel",
        entries: travel::ENTRIES,
    },
];

/// Every post across all sections, in feed order.
pub fn all_entries() -> impl Iterator<Item = &'static Entry> {
    SECTIONS.iter().flat_map(|section| section.entries.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::PUBLISH_OFFSET;
    use std::collections::HashSet;
    use url::Url;

    #[test]
    fn test_ids_are_absolute_uris() {
        for entry in all_entries() {
            let url = Url::parse(entry.id)
                .unwrap_or_else(|e| panic!("{} is not a valid URI: {e}", entry.id));
            assert!(!url.cannot_be_a_base(), "{} is not absolute", entry.id);
            assert_eq!(url.scheme(), "https", "{}", entry.id);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in all_entries() {
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn test_every_entry_has_valid_links() {
        for entry in all_entries() {
            assert!(!entry.links.is_empty(), "{} has no links", entry.id);
            for link in entry.links {
                assert!(Url::parse(link.href).is_ok(), "{}", link.href);
            }
        }
    }

    #[test]
    fn test_every_date_is_a_real_day() {
        for entry in all_entries() {
            assert!(
                entry.published.at_midnight(*PUBLISH_OFFSET).is_ok(),
                "{} has invalid date {}",
                entry.id,
                entry.published
            );
        }
    }

    #[test]
    fn test_titles_are_not_empty() {
        for entry in all_entries() {
            assert!(!entry.title.trim().is_empty(), "{}", entry.id);
        }
    }

    #[test]
    fn test_section_order() {
        let names: Vec<_> = SECTIONS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["languages", "rants", "transit", "software", "travel"]
        );
        assert!(SECTIONS.iter().all(|s| !s.entries.is_empty()));
    }

    #[test]
    fn test_all_entries_concatenates_sections() {
        let total: usize = SECTIONS.iter().map(|s| s.entries.len()).sum();
        assert_eq!(all_entries().count(), total);
        assert_eq!(all_entries().next(), languages::ENTRIES.first());
        assert_eq!(all_entries().last(), travel::ENTRIES.last());
    }

    #[test]
    fn test_argparse_entry_links() {
        let entry = all_entries()
            .find(|e| e.id.ends_with("/argparse_and_cmd.html"))
            .expect("argparse post should be listed");

        assert_eq!(entry.published, PublishDate::ymd(2022, 11, 1));
        assert_eq!(entry.links.len(), 2);
        assert_eq!(entry.links[0].rel, LinkRel::SelfLink);
        assert!(entry.links[0].href.ends_with("/argparse_and_cmd.html"));
        assert_eq!(entry.links[1].rel, LinkRel::Alternate);
        assert!(entry.links[1].href.ends_with("/argparse_and_cmd_non_gist.html"));
        assert_eq!(entry.primary_link(), entry.links[0].href);
    }

    #[test]
    fn test_primary_link_fallbacks() {
        const ALTERNATE_ONLY: Entry = post!("https://x/a.html", "A", (2020, 7, 20), [
            Alternate "https://x/a_plain.html",
        ]);
        assert_eq!(ALTERNATE_ONLY.primary_link(), "https://x/a_plain.html");

        let no_links = Entry {
            links: &[],
            ..ALTERNATE_ONLY
        };
        assert_eq!(no_links.primary_link(), "https://x/a.html");
    }

    #[test]
    fn test_post_macro_defaults_to_self_link() {
        const ENTRY: Entry = post!("https://x/a.html", "A", (2020, 7, 20));
        assert_eq!(
            ENTRY.links,
            &[EntryLink {
                href: "https://x/a.html",
                rel: LinkRel::SelfLink,
            }]
        );
        assert_eq!(LinkRel::SelfLink.as_str(), "self");
        assert_eq!(LinkRel::Alternate.as_str(), "alternate");
    }
}
