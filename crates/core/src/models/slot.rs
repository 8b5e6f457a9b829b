use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::day::Weekday;

/// Half-open lesson time range in minutes since midnight, `[start, end)`.
///
/// Ordering (`start < end`) is a validator concern, not a constructor
/// invariant: the admission check owns the `InvalidRange` rejection so
/// callers get a decision value instead of a panic. The 1440 upper bound
/// holds because minutes come from `parse_hhmm`, whose maximum is 23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    pub start_minutes: u16,
    pub end_minutes: u16,
}

impl SlotRange {
    pub fn new(start_minutes: u16, end_minutes: u16) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }
}

/// An accepted lesson slot as held in an instructor's availability book.
///
/// The id exists only so a slot can be removed individually; the validator
/// never looks at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub day: Weekday,
    pub range: SlotRange,
}

impl TimeSlot {
    pub fn new(day: Weekday, range: SlotRange) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            range,
        }
    }
}
