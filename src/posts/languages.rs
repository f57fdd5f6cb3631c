//! Notes from learning languages.

use super::Entry;

pub const ENTRIES: &[Entry] = &[
    post!(
        "https://www.victorzhou.dev/languages/mandarin_tone_sandhi.html",
        "Mandarin tone sandhi, explained badly",
        (2020, 7, 20)
    ),
    post!(
        "https://www.victorzhou.dev/languages/japanese_particles_wa_ga.html",
        "は vs が: what finally made it click",
        (2020, 9, 6)
    ),
    post!(
        "https://www.victorzhou.dev/languages/spanish_subjunctive.html",
        "The Spanish subjunctive is a mood, not a tense",
        (2021, 1, 17)
    ),
    post!(
        "https://www.victorzhou.dev/languages/anki_two_years.html",
        "Two years of Anki: what stuck & what didn't",
        (2021, 11, 28)
    ),
    post!(
        "https://www.victorzhou.dev/languages/cantonese_vs_mandarin_reading.html",
        "Reading Cantonese when you only know Mandarin",
        (2023, 3, 12)
    ),
];
