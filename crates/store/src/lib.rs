//! # DriveTime Store
//!
//! In-memory availability books, one per instructor. This crate owns the
//! admission lifecycle: a candidate slot is validated against the day's
//! current contents under the write lock and inserted only when the
//! validator returns `Accepted`, so a stored book always satisfies the
//! no-overlap and minimum-gap invariants.
//!
//! There is no persistence; the process is the source of truth and the
//! store is rebuilt empty on restart.

pub mod book;

use std::collections::HashMap;
use std::sync::RwLock;

use drivetime_core::models::{
    day::Weekday,
    slot::{SlotRange, TimeSlot},
};
use drivetime_core::scheduling::validate::{validate, SlotDecision};
use eyre::{eyre, Result};
use tracing::debug;
use uuid::Uuid;

use book::InstructorBook;

/// Shared registry of instructor availability books.
///
/// A poisoned lock is not recoverable application state; it is surfaced as
/// an `eyre` error rather than a panic so handlers can map it to a 500.
#[derive(Debug, Default)]
pub struct AvailabilityStore {
    books: RwLock<HashMap<Uuid, InstructorBook>>,
}

impl AvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `candidate` against the instructor's day and inserts it on
    /// acceptance. Returns the decision plus the stored slot when admitted.
    pub fn admit(
        &self,
        instructor_id: Uuid,
        day: Weekday,
        candidate: SlotRange,
        min_gap_minutes: u16,
    ) -> Result<(SlotDecision, Option<TimeSlot>)> {
        let mut books = self.write_books()?;
        let book = books.entry(instructor_id).or_default();

        let decision = validate(day, candidate, &book.ranges_for(day), min_gap_minutes);
        match decision {
            SlotDecision::Accepted => {
                let slot = TimeSlot::new(day, candidate);
                book.insert(slot.clone());
                debug!(%instructor_id, %day, "slot admitted");
                Ok((decision, Some(slot)))
            }
            SlotDecision::Rejected(reason) => {
                debug!(%instructor_id, %day, %reason, "slot rejected");
                Ok((decision, None))
            }
        }
    }

    /// All of an instructor's slots, Monday through Sunday. An unknown
    /// instructor simply has an empty week.
    pub fn week_of(&self, instructor_id: Uuid) -> Result<Vec<TimeSlot>> {
        let books = self.read_books()?;
        Ok(books
            .get(&instructor_id)
            .map(InstructorBook::week)
            .unwrap_or_default())
    }

    /// Removes a single slot by id. Returns whether it existed.
    pub fn remove(&self, instructor_id: Uuid, slot_id: Uuid) -> Result<bool> {
        let mut books = self.write_books()?;
        Ok(books
            .get_mut(&instructor_id)
            .map(|book| book.remove(slot_id))
            .unwrap_or(false))
    }

    /// Replaces the instructor's entire week with `template`, bypassing
    /// validation. The caller guarantees the template satisfies the
    /// invariants by construction.
    pub fn replace_week(
        &self,
        instructor_id: Uuid,
        template: &[(Weekday, SlotRange)],
    ) -> Result<Vec<TimeSlot>> {
        let mut books = self.write_books()?;
        let book = books.entry(instructor_id).or_default();
        book.replace(template);
        debug!(%instructor_id, slots = template.len(), "week replaced");
        Ok(book.week())
    }

    fn read_books(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, InstructorBook>>> {
        self.books
            .read()
            .map_err(|_| eyre!("availability store lock poisoned"))
    }

    fn write_books(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, InstructorBook>>> {
        self.books
            .write()
            .map_err(|_| eyre!("availability store lock poisoned"))
    }
}
