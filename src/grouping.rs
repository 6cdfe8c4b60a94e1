//! Partitions street records into the five fixed alphabetical buckets.

use strum::Display;

use crate::schedule::StreetRecord;

/// One of the five fixed alphabetical buckets.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum LetterGroup {
    #[strum(serialize = "a-c")]
    AToC,
    #[strum(serialize = "d-g")]
    DToG,
    #[strum(serialize = "h-m")]
    HToM,
    #[strum(serialize = "n-s")]
    NToS,
    #[strum(serialize = "t-z")]
    TToZ,
}

impl LetterGroup {
    /// All buckets, in output order.
    pub const ALL: [LetterGroup; 5] = [
        LetterGroup::AToC,
        LetterGroup::DToG,
        LetterGroup::HToM,
        LetterGroup::NToS,
        LetterGroup::TToZ,
    ];

    /// Bucket for a street name, by its lower-cased first character.
    /// The ranges are ordered and exhaustive, so any character that
    /// sorts at or below the range's upper letter falls into that range.
    pub fn for_street(street: &str) -> LetterGroup {
        // Accepted records always carry non-empty street text.
        match street.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some(c) if c <= 'c' => LetterGroup::AToC,
            Some(c) if c <= 'g' => LetterGroup::DToG,
            Some(c) if c <= 'm' => LetterGroup::HToM,
            Some(c) if c <= 's' => LetterGroup::NToS,
            _ => LetterGroup::TToZ,
        }
    }
}

/// Partitions `records` into the five buckets and sorts each bucket
/// ascending by street name. All five buckets are always produced, in
/// [LetterGroup::ALL] order; the per-bucket sort is stable, so records
/// with equal street names keep their extraction order.
pub fn group_streets(records: &[StreetRecord]) -> Vec<(LetterGroup, Vec<StreetRecord>)> {
    let mut groups: Vec<(LetterGroup, Vec<StreetRecord>)> =
        LetterGroup::ALL.iter().map(|&g| (g, Vec::new())).collect();

    for record in records {
        let bucket = LetterGroup::for_street(&record.street);
        if let Some((_, members)) = groups.iter_mut().find(|(g, _)| *g == bucket) {
            members.push(record.clone());
        }
    }

    for (_, members) in groups.iter_mut() {
        members.sort_by(|a, b| a.street.cmp(&b.street));
    }

    groups
}
