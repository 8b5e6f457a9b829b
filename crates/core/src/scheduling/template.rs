//! Default weekly availability template.
//!
//! Six one-hour lessons per weekday, starting at 09:00 with a 30-minute
//! break between lessons, so the last lesson runs 16:30–17:30. The template
//! satisfies the admission invariants by construction, which is why the
//! bulk "generate week" operation may overwrite a book without re-running
//! the validator.

use crate::models::{day::Weekday, slot::SlotRange};

/// Lessons per weekday in the generated template.
pub const LESSONS_PER_DAY: usize = 6;
/// First lesson starts at 09:00.
pub const DAY_START_MINUTES: u16 = 9 * 60;
/// Each lesson lasts one hour.
pub const LESSON_MINUTES: u16 = 60;
/// Break between consecutive lessons.
pub const BREAK_MINUTES: u16 = 30;

/// Builds the full Mon–Fri template, day-major and sorted by start time.
pub fn default_week() -> Vec<(Weekday, SlotRange)> {
    let mut slots = Vec::with_capacity(5 * LESSONS_PER_DAY);

    for day in Weekday::ALL.into_iter().filter(Weekday::is_lesson_day) {
        let mut start = DAY_START_MINUTES;
        for _ in 0..LESSONS_PER_DAY {
            slots.push((day, SlotRange::new(start, start + LESSON_MINUTES)));
            start += LESSON_MINUTES + BREAK_MINUTES;
        }
    }

    slots
}
