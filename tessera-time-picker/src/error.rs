//! Errors produced by fallible time picker constructors and conversions.

use thiserror::Error;

/// Errors returned when building time values from untrusted input.
#[derive(Debug, Error)]
pub enum TimePickerError {
    /// The hour does not fit the 24-hour clock.
    #[error("hour {0} is out of range 0..=23")]
    HourOutOfRange(u8),
    /// The minute does not fit the clock face.
    #[error("minute {0} is out of range 0..=59")]
    MinuteOutOfRange(u8),
    /// Converting to or from a calendar date-time failed.
    #[error(transparent)]
    Calendar(#[from] jiff::Error),
}
