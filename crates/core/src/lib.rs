//! # DriveTime Core
//!
//! Domain types and scheduling logic for the DriveTime driving-school
//! platform. This crate is free of I/O: everything here is a pure
//! computation over in-memory values, which is what makes the slot
//! validator trivially testable.
//!
//! The crate is organized as:
//!
//! - **models**: weekdays, slot ranges, and the request/response types
//!   exchanged with the API layer
//! - **scheduling**: the admission validator, the default week template,
//!   and strict `HH:MM` parsing/formatting
//! - **errors**: the domain error taxonomy shared by the other crates

pub mod errors;
pub mod models;
pub mod scheduling;
