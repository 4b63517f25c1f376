use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Custom error type for parsing clock times
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ParseTimeError {
    /// The input was not a 24-hour `H:MM` or `HH:MM` time
    InvalidFormat(String),
}

impl Display for ParseTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidFormat(input) => write!(f, "Invalid time string: '{input}'"),
        }
    }
}

impl std::error::Error for ParseTimeError {}

/// Parses a 24-hour `"H:MM"` or `"HH:MM"` time, no timezone.
///
/// # Returns
/// The parsed [`NaiveTime`], or [`ParseTimeError::InvalidFormat`] when the
/// input does not split into an hour and a minute component.
pub fn parse_time(time: &str) -> Result<NaiveTime, ParseTimeError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ParseTimeError::InvalidFormat(time.to_owned()))
}

/// Converts a time of day to minutes since midnight
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
