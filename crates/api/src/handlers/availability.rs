//! # Availability Handlers
//!
//! The form-handling layer in front of the slot validator. Requests arrive
//! with raw `HH:MM` strings; this module parses them (a parse failure is a
//! 400, the one failure mode upstream of the validator), runs admission
//! through the store, and returns the decision for the client to display.
//!
//! Rejections are ordinary 200 responses carrying `accepted: false` and the
//! human-readable reason: the instructor adjusts the form and retries, so
//! nothing about a rejection is an HTTP error.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use drivetime_core::{
    errors::DriveTimeError,
    models::{
        availability::{
            AddSlotRequest, AddSlotResponse, DayAvailability, GenerateWeekResponse,
            GetAvailabilityResponse, RemoveSlotResponse, SlotResponse,
        },
        slot::{SlotRange, TimeSlot},
    },
    scheduling::{template, timefmt, validate::SlotDecision},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn slot_response(slot: &TimeSlot) -> SlotResponse {
    SlotResponse {
        id: slot.id,
        day: slot.day,
        start: timefmt::format_hhmm(slot.range.start_minutes),
        end: timefmt::format_hhmm(slot.range.end_minutes),
    }
}

/// Groups a start-ordered week listing into per-day buckets, Monday first.
fn group_by_day(slots: &[TimeSlot]) -> Vec<DayAvailability> {
    let mut days: Vec<DayAvailability> = Vec::new();
    for slot in slots {
        match days.last_mut() {
            Some(bucket) if bucket.day == slot.day => bucket.slots.push(slot_response(slot)),
            _ => days.push(DayAvailability {
                day: slot.day,
                slots: vec![slot_response(slot)],
            }),
        }
    }
    days
}

/// Lists an instructor's current week of availability.
///
/// ```text
/// GET /api/instructors/:id/availability
/// ```
#[axum::debug_handler]
pub async fn list_availability(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    let week = state.store.week_of(instructor_id)?;

    Ok(Json(GetAvailabilityResponse {
        instructor_id,
        days: group_by_day(&week),
    }))
}

/// Submits a candidate slot for admission.
///
/// ```text
/// POST /api/instructors/:id/availability
/// { "day": "Wed", "start": "09:00", "end": "10:00" }
/// ```
///
/// Returns 200 with the decision; only an unparsable time is a 400.
#[axum::debug_handler]
pub async fn add_slot(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
    Json(payload): Json<AddSlotRequest>,
) -> Result<Json<AddSlotResponse>, AppError> {
    // Parse form input before the validator ever sees it
    let start_minutes = timefmt::parse_hhmm(&payload.start)
        .map_err(|e| DriveTimeError::Validation(e.to_string()))?;
    let end_minutes = timefmt::parse_hhmm(&payload.end)
        .map_err(|e| DriveTimeError::Validation(e.to_string()))?;

    let candidate = SlotRange::new(start_minutes, end_minutes);
    let (decision, slot) = state.store.admit(
        instructor_id,
        payload.day,
        candidate,
        state.min_gap_minutes,
    )?;

    let response = match decision {
        SlotDecision::Accepted => AddSlotResponse {
            accepted: true,
            reason: None,
            slot: slot.as_ref().map(slot_response),
        },
        SlotDecision::Rejected(reason) => AddSlotResponse {
            accepted: false,
            reason: Some(reason.to_string()),
            slot: None,
        },
    };

    Ok(Json(response))
}

/// Removes a single slot by id.
///
/// ```text
/// DELETE /api/instructors/:id/availability/:slot_id
/// ```
#[axum::debug_handler]
pub async fn remove_slot(
    State(state): State<Arc<ApiState>>,
    Path((instructor_id, slot_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<RemoveSlotResponse>, AppError> {
    let removed = state.store.remove(instructor_id, slot_id)?;

    if !removed {
        return Err(AppError(DriveTimeError::NotFound(format!(
            "Slot with ID {} not found",
            slot_id
        ))));
    }

    Ok(Json(RemoveSlotResponse { removed }))
}

/// Replaces the instructor's week with the default Mon-Fri template.
///
/// ```text
/// POST /api/instructors/:id/availability/generate
/// ```
///
/// This is a wholesale overwrite; the template satisfies the scheduling
/// invariants by construction, so it bypasses admission.
#[axum::debug_handler]
pub async fn generate_week(
    State(state): State<Arc<ApiState>>,
    Path(instructor_id): Path<Uuid>,
) -> Result<Json<GenerateWeekResponse>, AppError> {
    let week = state
        .store
        .replace_week(instructor_id, &template::default_week())?;

    Ok(Json(GenerateWeekResponse {
        instructor_id,
        slot_count: week.len(),
        days: group_by_day(&week),
    }))
}
