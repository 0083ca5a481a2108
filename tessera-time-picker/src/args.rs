//! Construction options for [`TimePickerController`].
//!
//! [`TimePickerController`]: crate::controller::TimePickerController

use derive_setters::Setters;

use crate::{meridiem::MeridiemLabels, model::DisplayMode};

/// Configuration options for a time picker.
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct TimePickerArgs {
    /// Initial hour of day (0-23), clamped.
    pub initial_hour: u8,
    /// Initial minute (0-59), clamped.
    pub initial_minute: u8,
    /// Whether the hour is shown on a 24-hour or 12-hour clock.
    pub display_mode: DisplayMode,
    /// Localized AM/PM labels.
    #[setters(into)]
    pub meridiem_labels: MeridiemLabels,
    /// Whether the picker reacts to user input.
    pub enabled: bool,
}

impl Default for TimePickerArgs {
    fn default() -> Self {
        let (hour, minute) = current_local_time();
        Self {
            initial_hour: hour,
            initial_minute: minute,
            display_mode: DisplayMode::H12,
            meridiem_labels: MeridiemLabels::default(),
            enabled: true,
        }
    }
}

fn current_local_time() -> (u8, u8) {
    let now = jiff::Zoned::now();
    (now.hour() as u8, now.minute() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_chain() {
        let args = TimePickerArgs::default()
            .initial_hour(9)
            .initial_minute(45)
            .display_mode(DisplayMode::H24)
            .meridiem_labels(MeridiemLabels::new("a.m.", "p.m."))
            .enabled(false);
        assert_eq!(args.initial_hour, 9);
        assert_eq!(args.initial_minute, 45);
        assert_eq!(args.display_mode, DisplayMode::H24);
        assert_eq!(args.meridiem_labels.am, "a.m.");
        assert!(!args.enabled);
    }

    #[test]
    fn default_time_is_in_range() {
        let args = TimePickerArgs::default();
        assert!(args.initial_hour <= 23);
        assert!(args.initial_minute <= 59);
        assert!(args.enabled);
    }
}
