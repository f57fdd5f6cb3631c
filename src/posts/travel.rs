//! Trip reports.

use super::Entry;

pub const ENTRIES: &[Entry] = &[
    post!(
        "https://www.victorzhou.dev/travel/taiwan_2019.html",
        "Ten days in Taiwan",
        (2020, 7, 26)
    ),
    post!(
        "https://www.victorzhou.dev/travel/shinkansen.html",
        "Riding every Shinkansen line",
        (2023, 10, 29)
    ),
    post!(
        "https://www.victorzhou.dev/travel/mexico_city.html",
        "Mexico City on foot and by Metro",
        (2024, 3, 3)
    ),
    post!(
        "https://www.victorzhou.dev/travel/swiss_rail_pass.html",
        "Is the Swiss Travel Pass worth it?",
        (2024, 9, 15)
    ),
];
