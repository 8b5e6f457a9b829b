use std::collections::BTreeMap;

use drivetime_core::models::{
    day::Weekday,
    slot::{SlotRange, TimeSlot},
};
use uuid::Uuid;

/// One instructor's accepted slots, grouped by day.
///
/// Per-day lists are kept sorted by start time so listings are stable and
/// the validator reports the earliest violating slot first. The book never
/// validates; admission lives in [`crate::AvailabilityStore`].
#[derive(Debug, Default)]
pub struct InstructorBook {
    days: BTreeMap<Weekday, Vec<TimeSlot>>,
}

impl InstructorBook {
    /// The ranges already accepted for `day`, in start order.
    pub fn ranges_for(&self, day: Weekday) -> Vec<SlotRange> {
        self.days
            .get(&day)
            .map(|slots| slots.iter().map(|s| s.range).collect())
            .unwrap_or_default()
    }

    /// Inserts an already-validated slot, keeping the day sorted.
    pub fn insert(&mut self, slot: TimeSlot) {
        let slots = self.days.entry(slot.day).or_default();
        slots.push(slot);
        slots.sort_by_key(|s| s.range.start_minutes);
    }

    /// Removes a slot by id. Returns whether anything was removed.
    pub fn remove(&mut self, slot_id: Uuid) -> bool {
        for slots in self.days.values_mut() {
            if let Some(pos) = slots.iter().position(|s| s.id == slot_id) {
                slots.remove(pos);
                return true;
            }
        }
        false
    }

    /// Overwrites the whole book with a pre-built template.
    pub fn replace(&mut self, template: &[(Weekday, SlotRange)]) {
        self.days.clear();
        for (day, range) in template {
            self.insert(TimeSlot::new(*day, *range));
        }
    }

    /// All slots, Monday through Sunday, start-ordered within each day.
    pub fn week(&self) -> Vec<TimeSlot> {
        self.days.values().flatten().cloned().collect()
    }
}
