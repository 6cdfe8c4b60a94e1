//! Sanity checks over the full extracted record list.
//!
//! The battery reports; it never mutates input and never aborts the run.

use std::collections::HashSet;

use serde::Deserialize;

use crate::grouping;
use crate::schedule::{Day, StreetRecord, Zone};

/// Acceptable bounds (inclusive) on the total record count.
#[derive(Clone, Debug, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

/// Expected properties of an extraction run. Calibrated to one document
/// revision; override via the expectations file for another.
#[derive(Clone, Debug)]
pub struct Expectations {
    pub count_range: CountRange,
    pub known_streets: Vec<StreetRecord>,
}

/// Result of a single check.
#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Report from the full battery, in check order.
#[derive(Debug)]
pub struct ValidationReport {
    pub checks: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// `true` iff every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

/// Runs the fixed battery of checks against `records`.
pub fn validate(records: &[StreetRecord], expectations: &Expectations) -> ValidationReport {
    ValidationReport {
        checks: vec![
            check_count(records, &expectations.count_range),
            check_known_streets(records, &expectations.known_streets),
            check_zones(records),
            check_days(records),
            check_range_order(records),
            check_uniqueness(records),
            check_non_negative(records),
            check_distribution(records),
        ],
    }
}

fn check_count(records: &[StreetRecord], range: &CountRange) -> CheckOutcome {
    let count = records.len();
    CheckOutcome {
        name: "count",
        passed: range.min <= count && count <= range.max,
        detail: format!(
            "{} records extracted, expected {}..={}",
            count, range.min, range.max
        ),
    }
}

fn check_known_streets(records: &[StreetRecord], known: &[StreetRecord]) -> CheckOutcome {
    let missing: Vec<&str> = known
        .iter()
        .filter(|expected| !records.contains(expected))
        .map(|expected| expected.street.as_str())
        .collect();
    CheckOutcome {
        name: "known-streets",
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            format!("all {} known streets present", known.len())
        } else {
            format!(
                "{}/{} known streets missing: {:?}",
                missing.len(),
                known.len(),
                missing
            )
        },
    }
}

fn check_zones(records: &[StreetRecord]) -> CheckOutcome {
    let outside = records
        .iter()
        .filter(|record| !matches!(record.zone, Zone::A | Zone::B))
        .count();
    CheckOutcome {
        name: "zone-domain",
        passed: outside == 0,
        detail: format!("{} records outside zone domain", outside),
    }
}

fn check_days(records: &[StreetRecord]) -> CheckOutcome {
    let outside = records
        .iter()
        .filter(|record| {
            !matches!(
                record.day,
                Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday
            )
        })
        .count();
    CheckOutcome {
        name: "day-domain",
        passed: outside == 0,
        detail: format!("{} records outside weekday domain", outside),
    }
}

fn check_range_order(records: &[StreetRecord]) -> CheckOutcome {
    let inverted = records
        .iter()
        .filter(|record| record.low > record.high)
        .count();
    CheckOutcome {
        name: "range-order",
        passed: inverted == 0,
        detail: format!("{} records with low > high", inverted),
    }
}

fn check_uniqueness(records: &[StreetRecord]) -> CheckOutcome {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.dedup_key()) {
            duplicates.push(record.dedup_key());
        }
    }
    CheckOutcome {
        name: "uniqueness",
        passed: duplicates.is_empty(),
        detail: if duplicates.is_empty() {
            "no duplicate (street, low, high) entries".to_string()
        } else {
            format!("{} duplicate entries: {:?}", duplicates.len(), duplicates)
        },
    }
}

fn check_non_negative(records: &[StreetRecord]) -> CheckOutcome {
    let negative = records
        .iter()
        .filter(|record| record.low < 0 || record.high < 0)
        .count();
    CheckOutcome {
        name: "non-negative",
        passed: negative == 0,
        detail: format!("{} records with negative house numbers", negative),
    }
}

/// Purely informational: reports the bucket sizes for operator review.
fn check_distribution(records: &[StreetRecord]) -> CheckOutcome {
    let groups = grouping::group_streets(records);
    let sizes: Vec<String> = groups
        .iter()
        .map(|(group, members)| format!("{}: {}", group, members.len()))
        .collect();
    CheckOutcome {
        name: "distribution",
        passed: true,
        detail: sizes.join(", "),
    }
}
