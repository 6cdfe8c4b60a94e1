//! Value types for the extracted pickup schedule.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Weekday on which waste collection occurs. Pickups only happen on
/// weekdays; weekend values from the source document are discarded
/// during extraction, not stored.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Pickup-service area designator.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize,
)]
pub enum Zone {
    A,
    B,
}

/// One pickup rule: a house-number range on a street, with its pickup day
/// and zone. Immutable once constructed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StreetRecord {
    /// Upper-cased street name, never empty.
    pub street: String,
    /// Inclusive lower bound of the house-number range.
    pub low: i32,
    /// Inclusive upper bound of the house-number range.
    pub high: i32,
    pub day: Day,
    pub zone: Zone,
}

impl StreetRecord {
    /// Identity used for duplicate detection; day and zone are excluded.
    pub fn dedup_key(&self) -> (&str, i32, i32) {
        (self.street.as_str(), self.low, self.high)
    }
}
