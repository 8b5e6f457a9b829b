//! Strict `HH:MM` clock-time handling for form input.
//!
//! The mobile clients submit zero-padded 24-hour times. Anything looser
//! ("9:00", trailing junk, out-of-range fields) is rejected here, before
//! the value ever reaches the validator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time \"{0}\": expected zero-padded 24-hour HH:MM")]
pub struct TimeParseError(pub String);

/// Parses a strict `HH:MM` string into minutes since midnight.
///
/// Accepts exactly two zero-padded digits per group, anchored to the whole
/// string, with hour 00–23 and minute 00–59.
pub fn parse_hhmm(input: &str) -> Result<u16, TimeParseError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();

    if !well_formed {
        return Err(TimeParseError(input.to_string()));
    }

    let hour = u16::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
    let minute = u16::from((bytes[3] - b'0') * 10 + (bytes[4] - b'0'));

    if hour > 23 || minute > 59 {
        return Err(TimeParseError(input.to_string()));
    }

    Ok(hour * 60 + minute)
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
