//! # Slot Admission Validator
//!
//! Decides whether a candidate lesson slot may be inserted into a day's
//! existing slot set. The checks run cheapest-and-most-decisive first:
//!
//! 1. Weekday membership — lessons are Monday through Friday only
//! 2. Range well-formedness — start must be strictly before end
//! 3. Per existing slot: overlap, then the gap on either side
//!
//! The scan is O(n) over the day's existing slots and returns on the first
//! violation. Callers keep their slot lists sorted by start time so the
//! reported violation is deterministic, but correctness does not depend on
//! order since every pair is checked.
//!
//! This is a pure function: no I/O, no shared state, never panics. The
//! caller inserts the slot into its collection only after an `Accepted`
//! decision comes back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{day::Weekday, slot::SlotRange};

/// Why a candidate slot was turned away. The `Display` text is what the
/// instructor sees next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Requested day falls on a weekend.
    WeekendNotAllowed,
    /// Candidate start is not strictly before its end.
    InvalidRange,
    /// Candidate intersects an existing slot; payload is that slot's range.
    Overlaps { start: u16, end: u16 },
    /// Candidate sits before an existing slot but leaves too little break.
    GapTooSmallBefore { existing_start: u16 },
    /// Candidate sits after an existing slot but leaves too little break.
    GapTooSmallAfter { existing_end: u16 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::WeekendNotAllowed => {
                write!(f, "Lessons can only be scheduled Monday through Friday")
            }
            RejectReason::InvalidRange => {
                write!(f, "Start time must be before end time")
            }
            RejectReason::Overlaps { start, end } => {
                write!(
                    f,
                    "Overlaps an existing slot from {} to {}",
                    super::timefmt::format_hhmm(*start),
                    super::timefmt::format_hhmm(*end)
                )
            }
            RejectReason::GapTooSmallBefore { existing_start } => {
                write!(
                    f,
                    "Too close to the slot starting at {}",
                    super::timefmt::format_hhmm(*existing_start)
                )
            }
            RejectReason::GapTooSmallAfter { existing_end } => {
                write!(
                    f,
                    "Too close to the slot ending at {}",
                    super::timefmt::format_hhmm(*existing_end)
                )
            }
        }
    }
}

/// Admission decision for a candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotDecision {
    Accepted,
    Rejected(RejectReason),
}

impl SlotDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SlotDecision::Accepted)
    }
}

/// Checks whether `candidate` may join `existing` on `day`, requiring at
/// least `min_gap_minutes` of break on either side of every existing slot.
///
/// `existing` must contain only that day's slots. Returns the first
/// violation found, or `Accepted` when none of the existing slots object.
pub fn validate(
    day: Weekday,
    candidate: SlotRange,
    existing: &[SlotRange],
    min_gap_minutes: u16,
) -> SlotDecision {
    if !day.is_lesson_day() {
        return SlotDecision::Rejected(RejectReason::WeekendNotAllowed);
    }

    if candidate.start_minutes >= candidate.end_minutes {
        return SlotDecision::Rejected(RejectReason::InvalidRange);
    }

    for slot in existing {
        // Half-open intersection test: [a, b) and [c, d) meet iff a < d && b > c
        if candidate.start_minutes < slot.end_minutes && candidate.end_minutes > slot.start_minutes
        {
            return SlotDecision::Rejected(RejectReason::Overlaps {
                start: slot.start_minutes,
                end: slot.end_minutes,
            });
        }

        // No overlap, so the candidate lies entirely on one side; the two
        // gap branches stay separate because their payloads differ.
        if candidate.end_minutes <= slot.start_minutes
            && slot.start_minutes - candidate.end_minutes < min_gap_minutes
        {
            return SlotDecision::Rejected(RejectReason::GapTooSmallBefore {
                existing_start: slot.start_minutes,
            });
        }

        if candidate.start_minutes >= slot.end_minutes
            && candidate.start_minutes - slot.end_minutes < min_gap_minutes
        {
            return SlotDecision::Rejected(RejectReason::GapTooSmallAfter {
                existing_end: slot.end_minutes,
            });
        }
    }

    SlotDecision::Accepted
}
