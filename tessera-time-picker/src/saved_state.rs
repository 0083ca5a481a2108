//! Persisted picker state and calendar conversions.
//!
//! Only the hour and minute survive a destroy/recreate cycle. The display
//! mode comes from configuration and the meridiem is re-derived from the
//! hour on restore.

use jiff::civil::{DateTime, Time};

use crate::{error::TimePickerError, model::CanonicalTime};

/// Hour and minute saved across picker recreation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimePickerSavedState {
    /// Hour of day (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
}

impl TimePickerSavedState {
    /// Validates the saved fields.
    pub fn to_time(self) -> Result<CanonicalTime, TimePickerError> {
        CanonicalTime::new(self.hour, self.minute)
    }
}

impl From<CanonicalTime> for TimePickerSavedState {
    fn from(time: CanonicalTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

/// Reads the wall-clock hour and minute of a calendar value.
pub fn time_of(calendar: DateTime) -> CanonicalTime {
    // jiff guarantees 0..=23 and 0..=59.
    CanonicalTime::clamped(calendar.hour() as u8, calendar.minute() as u8)
}

/// Returns `calendar` with its hour and minute replaced by `time`, keeping
/// the date, second and sub-second fields.
pub fn with_time(calendar: DateTime, time: CanonicalTime) -> Result<DateTime, TimePickerError> {
    let time = Time::new(
        time.hour() as i8,
        time.minute() as i8,
        calendar.second(),
        calendar.subsec_nanosecond(),
    )?;
    Ok(DateTime::from_parts(calendar.date(), time))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn saved_state_validates_fields() {
        let saved = TimePickerSavedState {
            hour: 21,
            minute: 7,
        };
        assert_eq!(
            saved.to_time().expect("valid time"),
            CanonicalTime::new(21, 7).expect("valid time")
        );

        let broken = TimePickerSavedState {
            hour: 21,
            minute: 75,
        };
        assert!(matches!(
            broken.to_time(),
            Err(TimePickerError::MinuteOutOfRange(75))
        ));
    }

    #[test]
    fn with_time_keeps_date_and_seconds() {
        let calendar = date(2024, 3, 9).at(8, 15, 42, 500);
        let time = CanonicalTime::new(22, 1).expect("valid time");
        let updated = with_time(calendar, time).expect("valid calendar");
        assert_eq!(updated, date(2024, 3, 9).at(22, 1, 42, 500));
        assert_eq!(time_of(updated), time);
    }
}
