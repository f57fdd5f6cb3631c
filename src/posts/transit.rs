//! Trains, buses, and the agencies that run them.

use super::Entry;

pub const ENTRIES: &[Entry] = &[
    post!(
        "https://www.victorzhou.dev/transit/caltrain_electrification.html",
        "Caltrain electrification, one year in",
        (2025, 9, 21)
    ),
    post!(
        "https://www.victorzhou.dev/transit/bart_headways.html",
        "Why BART headways matter more than top speed",
        (2021, 3, 7)
    ),
    post!(
        "https://www.victorzhou.dev/transit/tokyo_through_running.html",
        "Through-running in Tokyo, and why the Bay Area should care",
        (2022, 4, 24)
    ),
    post!(
        "https://www.victorzhou.dev/transit/clipper_2.html",
        "Clipper 2.0 and the long road to open payments",
        (2023, 8, 5)
    ),
    post!(
        "https://www.victorzhou.dev/transit/bus_lanes.html",
        "Paint is cheap: a case for more bus lanes",
        (2024, 1, 14)
    ),
];
