//! Software engineering.

use super::Entry;

pub const ENTRIES: &[Entry] = &[
    post!(
        "https://www.victorzhou.dev/software/argparse_and_cmd.html",
        "Building interactive CLIs with argparse and cmd",
        (2022, 11, 1),
        [
            SelfLink "https://www.victorzhou.dev/software/argparse_and_cmd.html",
            Alternate "https://www.victorzhou.dev/software/argparse_and_cmd_non_gist.html",
        ]
    ),
    post!(
        "https://www.victorzhou.dev/software/code_review.html",
        "What I look for in a code review",
        (2020, 8, 30)
    ),
    post!(
        "https://www.victorzhou.dev/software/static_site_feeds.html",
        "Generating RSS and Atom feeds for a static site",
        (2022, 12, 18)
    ),
    post!(
        "https://www.victorzhou.dev/software/boring_technology.html",
        "Choose boring technology, then make it less boring",
        (2023, 5, 21)
    ),
    post!(
        "https://www.victorzhou.dev/software/flaky_tests.html",
        "A field guide to flaky tests",
        (2024, 6, 2)
    ),
];
