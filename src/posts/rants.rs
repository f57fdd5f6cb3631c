//! Opinions, loosely held.

use super::Entry;

pub const ENTRIES: &[Entry] = &[
    post!(
        "https://www.victorzhou.dev/rants/tipping_screens.html",
        "Tipping screens have gotten out of hand",
        (2021, 5, 2)
    ),
    post!(
        "https://www.victorzhou.dev/rants/dark_mode.html",
        "Not every website needs a dark mode toggle",
        (2021, 8, 14)
    ),
    post!(
        "https://www.victorzhou.dev/rants/meetings.html",
        "Your meeting should have been a document",
        (2022, 2, 20)
    ),
    post!(
        "https://www.victorzhou.dev/rants/qr_menus.html",
        "Bring back paper menus",
        (2022, 6, 9)
    ),
];
