/// Default Mon–Fri lesson template
pub mod template;
/// Strict `HH:MM` parsing and formatting
pub mod timefmt;
/// Slot admission validator
pub mod validate;
