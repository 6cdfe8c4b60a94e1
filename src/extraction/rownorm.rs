//! Normalizes one raw table row into a street record.
//!
//! Rows arrive untrusted from the PDF table extraction: cells can be
//! missing, the numeric columns can hold garbage, and the weekday/zone
//! columns exhibit two known corruption patterns (a weekday split across
//! two cells with the zone letter fused onto the trailing `y`, and a
//! weekday fused with the zone into one cell) that are repaired here.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Deserialize;

use crate::extraction::parseutil::title_case;
use crate::schedule::{Day, StreetRecord, Zone};
use crate::table::Row;

/// Width class of a raw row, computed once and dispatched on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowShape {
    /// Five or more cells: separate weekday and zone columns.
    Wide,
    /// Exactly four cells: weekday and zone fused into one column.
    Combined,
    /// Exactly three cells: no weekday/zone columns at all.
    Narrow,
}

impl RowShape {
    fn of(width: usize) -> Self {
        if width >= 5 {
            RowShape::Wide
        } else if width == 4 {
            RowShape::Combined
        } else {
            RowShape::Narrow
        }
    }
}

/// Why a row was discarded. Every variant is reported to the operator.
#[derive(Debug, Eq, PartialEq)]
pub enum SkipReason {
    /// Fewer than three cells.
    TooFewCells,
    /// The house-number cells did not parse as integers.
    BadHouseRange(String),
    /// Three cells only: nowhere to read a weekday or zone from.
    InsufficientColumns,
    /// Every cell is empty or whitespace.
    EmptyRow,
    /// The street cell is empty.
    EmptyStreet,
    /// The zone cell is empty, or not exactly `A` or `B`.
    EmptyZone,
    /// The weekday is not one of the five pickup weekdays.
    InvalidDay(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SkipReason::*;
        match self {
            TooFewCells => write!(f, "fewer than 3 cells"),
            BadHouseRange(detail) => write!(f, "bad house-number range: {}", detail),
            InsufficientColumns => write!(f, "insufficient columns"),
            EmptyRow => write!(f, "empty row"),
            EmptyStreet => write!(f, "empty street"),
            EmptyZone => write!(f, "empty zone"),
            InvalidDay(day) => write!(f, "invalid day {:?}", day),
        }
    }
}

/// A repair applied while normalizing a row, reported so that corrupted
/// input stays visible to the operator.
#[derive(Debug, Eq, PartialEq)]
pub enum RowRepair {
    /// A weekday split across two cells with the zone letter fused onto
    /// the trailing `y`, e.g. `"Wednesda"` + `"yA"`.
    SplitWeekday { day: String, zone: Zone },
    /// A weekday and zone fused into a single cell, e.g. `"MondayB"`.
    CombinedWeekday { day: String, zone: Zone },
    /// A configured day patch replaced the day value.
    PatchedDay { street: String, from: String, to: Day },
}

impl Display for RowRepair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RowRepair::*;
        match self {
            SplitWeekday { day, zone } => {
                write!(f, "rejoined split weekday {:?} zone {}", day, zone)
            }
            CombinedWeekday { day, zone } => {
                write!(f, "split fused weekday/zone into {:?} zone {}", day, zone)
            }
            PatchedDay { street, from, to } => {
                write!(
                    f,
                    "patched day {:?} to {} for {} (unverified placeholder)",
                    from, to, street
                )
            }
        }
    }
}

/// Forces the pickup day of one specific record. Keyed on the exact
/// street and house range plus the cleaned day text that triggers it, so
/// a corrected source document is never patched.
#[derive(Clone, Debug, Deserialize)]
pub struct DayPatch {
    pub street: String,
    pub low: i32,
    pub high: i32,
    /// Cleaned day text that triggers the patch, e.g. `"0"`.
    pub when_day: String,
    pub day: Day,
}

/// Result of normalizing one raw row.
#[derive(Debug)]
pub enum RowOutcome {
    Accepted {
        record: StreetRecord,
        repairs: Vec<RowRepair>,
    },
    Skipped {
        row: Row,
        reason: SkipReason,
    },
}

/// Normalizes `row` into a street record, or a skip decision carrying the
/// row and the reason. Never panics on malformed input.
pub fn normalize_row(row: Row, patches: &[DayPatch]) -> RowOutcome {
    match normalize(&row, patches) {
        Ok((record, repairs)) => RowOutcome::Accepted { record, repairs },
        Err(reason) => RowOutcome::Skipped { row, reason },
    }
}

fn normalize(
    row: &Row,
    patches: &[DayPatch],
) -> Result<(StreetRecord, Vec<RowRepair>), SkipReason> {
    if row.len() < 3 {
        return Err(SkipReason::TooFewCells);
    }

    let low = parse_house_number(&row[0])?;
    let high = parse_house_number(&row[1])?;
    let street = row[2].trim().to_uppercase();

    let mut repairs = Vec::new();
    let (day_raw, zone_raw) = match RowShape::of(row.len()) {
        RowShape::Wide => split_weekday(&row[3], &row[4], &mut repairs),
        RowShape::Combined => combined_weekday(&row[3], &mut repairs),
        RowShape::Narrow => return Err(SkipReason::InsufficientColumns),
    };

    if row.iter().all(|cell| cell.trim().is_empty()) {
        return Err(SkipReason::EmptyRow);
    }
    if street.is_empty() {
        return Err(SkipReason::EmptyStreet);
    }

    let day_text = clean_day(&day_raw);
    let zone = clean_zone(&zone_raw).ok_or(SkipReason::EmptyZone)?;

    let day = match find_patch(patches, &street, low, high, &day_text) {
        Some(patch) => {
            repairs.push(RowRepair::PatchedDay {
                street: street.clone(),
                from: day_text,
                to: patch.day,
            });
            patch.day
        }
        None => Day::from_str(&day_text).map_err(|_| SkipReason::InvalidDay(day_text))?,
    };

    Ok((
        StreetRecord {
            street,
            low,
            high,
            day,
            zone,
        },
        repairs,
    ))
}

fn parse_house_number(cell: &str) -> Result<i32, SkipReason> {
    let text = cell.trim();
    text.parse::<i32>()
        .map_err(|err| SkipReason::BadHouseRange(format!("{:?}: {}", text, err)))
}

/// Weekday/zone extraction for [RowShape::Wide] rows, repairing the known
/// split pattern (`"Wednesda"` + `"yA"`).
fn split_weekday(day_cell: &str, zone_cell: &str, repairs: &mut Vec<RowRepair>) -> (String, String) {
    let day_raw = day_cell.trim();
    let zone_raw = zone_cell.trim();

    match fused_zone(zone_raw) {
        Some(zone) if day_raw.ends_with("da") => {
            let day = format!("{day_raw}y");
            repairs.push(RowRepair::SplitWeekday {
                day: day.clone(),
                zone,
            });
            (day, zone.to_string())
        }
        _ => (day_raw.to_string(), zone_raw.to_string()),
    }
}

/// Matches the two-character `"yA"`/`"yB"` remnant of a split weekday,
/// returning the zone letter it carries.
fn fused_zone(cell: &str) -> Option<Zone> {
    let mut chars = cell.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('y'), Some('A'), None) => Some(Zone::A),
        (Some('y'), Some('B'), None) => Some(Zone::B),
        _ => None,
    }
}

/// Weekday/zone extraction for [RowShape::Combined] rows, splitting the
/// known fused pattern (`"MondayB"`). Without the fused suffix the whole
/// cell is the weekday and the zone is left empty.
fn combined_weekday(cell: &str, repairs: &mut Vec<RowRepair>) -> (String, String) {
    let combined = cell.trim();

    for zone in [Zone::A, Zone::B] {
        if let Some(stem) = combined.strip_suffix(&format!("y{zone}")) {
            let day = format!("{stem}y");
            repairs.push(RowRepair::CombinedWeekday {
                day: day.clone(),
                zone,
            });
            return (day, zone.to_string());
        }
    }

    (combined.to_string(), String::new())
}

/// Expansions applied when a cleaned day value starts with a standard
/// three-letter weekday abbreviation.
const DAY_EXPANSIONS: [(&str, &str); 7] = [
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
];

/// Cleans a raw weekday cell: trim, title-case, then expand a leading
/// three-letter abbreviation to the full weekday name. Unrecognized text
/// passes through unchanged.
pub fn clean_day(raw: &str) -> String {
    let day = title_case(raw.trim());
    DAY_EXPANSIONS
        .iter()
        .find(|(abbrev, _)| day.starts_with(abbrev))
        .map(|&(_, full)| full.to_string())
        .unwrap_or(day)
}

/// Cleans a raw zone cell; only exactly `A` or `B` (after trimming and
/// upper-casing) survives.
fn clean_zone(raw: &str) -> Option<Zone> {
    Zone::from_str(&raw.trim().to_uppercase()).ok()
}

fn find_patch<'a>(
    patches: &'a [DayPatch],
    street: &str,
    low: i32,
    high: i32,
    day: &str,
) -> Option<&'a DayPatch> {
    patches
        .iter()
        .find(|p| p.street == street && p.low == low && p.high == high && p.when_day == day)
}
