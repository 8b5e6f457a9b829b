use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::day::Weekday;

/// Form submission for a new availability slot. Times arrive as the raw
/// `HH:MM` strings the client collected; parsing happens in the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSlotRequest {
    pub day: Weekday,
    pub start: String,
    pub end: String,
}

/// Outcome of an admission attempt. Rejections are informational, surfaced
/// to the instructor so they can adjust the form and retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSlotResponse {
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub id: Uuid,
    pub day: Weekday,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: Weekday,
    pub slots: Vec<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAvailabilityResponse {
    pub instructor_id: Uuid,
    pub days: Vec<DayAvailability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateWeekResponse {
    pub instructor_id: Uuid,
    pub days: Vec<DayAvailability>,
    pub slot_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSlotResponse {
    pub removed: bool,
}
