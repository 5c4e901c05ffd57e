use std::fmt;
use std::ops::Range;

/// Search rank buckets, checked in order. Same classification as
/// `get_searchrank_label()` in the Nominatim database functions.
pub const SEARCH_RANK_LABELS: &[(Range<i64>, &str)] = &[
    (i64::MIN..2, "continent"),
    (2..4, "sea"),
    (4..8, "country"),
    (8..12, "state"),
    (12..16, "county"),
    (16..17, "city"),
    (17..18, "town / island"),
    (18..19, "village / hamlet"),
    (20..21, "suburb"),
    (21..22, "postcode area"),
    (22..23, "croft / farm / locality / islet"),
    (23..24, "postcode area"),
    (25..26, "postcode point"),
    (26..27, "street / major landmark"),
    (27..28, "minor street / path"),
    (28..29, "house / building"),
];

// OSM admin levels stop well below this, anything higher is broken data.
pub const MAX_ADMIN_LEVEL: i64 = 15;

pub fn search_rank_label(rank: i64) -> String {
    SEARCH_RANK_LABELS
        .iter()
        .find(|(ranks, _)| ranks.contains(&rank))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| other_rank_label(rank))
}

/// Label for anything outside the rank table, including values that aren't ranks.
pub fn other_rank_label(rank: impl fmt::Display) -> String {
    format!("other: {}", rank)
}

pub fn admin_level(level: i64) -> String {
    if level < MAX_ADMIN_LEVEL {
        level.to_string()
    } else {
        String::new()
    }
}
