//! The canonical time value and its mode-aware slot representation.
//!
//! [`TimeValueModel`] owns the hour slot, the minute slot and the meridiem,
//! and is the only place where carries between them happen. Callers see the
//! time through canonical 24-hour accessors or through display accessors
//! that depend on the [`DisplayMode`].

use crate::{
    error::TimePickerError,
    meridiem::{DayPeriod, MeridiemState},
    slot::{SlotStep, Wrap, WrappingSlot},
};

const HOURS_IN_HALF_DAY: u8 = 12;
const MAX_HOUR: u8 = 23;
const MAX_MINUTE: u8 = 59;

/// A valid 24-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalTime {
    hour: u8,
    minute: u8,
}

impl CanonicalTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: CanonicalTime = CanonicalTime { hour: 0, minute: 0 };

    /// Creates a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimePickerError> {
        if hour > MAX_HOUR {
            return Err(TimePickerError::HourOutOfRange(hour));
        }
        if minute > MAX_MINUTE {
            return Err(TimePickerError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Creates a time, clamping each field into range.
    pub fn clamped(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(MAX_HOUR),
            minute: minute.min(MAX_MINUTE),
        }
    }

    /// Returns the hour of day (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// How the hour is presented and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Hours `0..=23`, no meridiem.
    H24,
    /// Hours `1..=12` plus AM/PM.
    #[default]
    H12,
}

impl DisplayMode {
    /// Returns the `(min, max)` bounds of the hour slot in this mode.
    pub fn hour_bounds(self) -> (u8, u8) {
        match self {
            DisplayMode::H24 => (0, MAX_HOUR),
            DisplayMode::H12 => (1, HOURS_IN_HALF_DAY),
        }
    }
}

/// Composes the hour slot, minute slot and meridiem into one canonical time.
///
/// Every mutator returns `true` only when the canonical time changed, which
/// is what the controller uses to decide whether to notify.
///
/// ```
/// use tessera_time_picker::{DayPeriod, DisplayMode, TimeValueModel};
///
/// let mut model = TimeValueModel::new(DisplayMode::H24, 15, 30);
/// model.set_display_mode(DisplayMode::H12);
/// assert_eq!(model.display_hour(), 3);
/// assert_eq!(model.period(), Some(DayPeriod::Pm));
/// assert_eq!(model.canonical_hour(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValueModel {
    display_mode: DisplayMode,
    hour: WrappingSlot,
    minute: WrappingSlot,
    meridiem: MeridiemState,
}

impl TimeValueModel {
    /// Creates a model showing `hour:minute` (24-hour values, clamped).
    pub fn new(display_mode: DisplayMode, hour: u8, minute: u8) -> Self {
        let (min, max) = display_mode.hour_bounds();
        let mut model = Self {
            display_mode,
            hour: WrappingSlot::new(min, max, min),
            minute: WrappingSlot::new(0, MAX_MINUTE, minute),
            meridiem: MeridiemState::default(),
        };
        model.apply_canonical_hour(hour.min(MAX_HOUR));
        model
    }

    /// Returns the display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Returns the canonical time.
    pub fn canonical(&self) -> CanonicalTime {
        CanonicalTime {
            hour: self.canonical_hour(),
            minute: self.canonical_minute(),
        }
    }

    /// Returns the hour of day (0-23).
    pub fn canonical_hour(&self) -> u8 {
        let value = self.hour.value();
        match self.display_mode {
            DisplayMode::H24 => value,
            DisplayMode::H12 => match (self.meridiem.is_am(), value == HOURS_IN_HALF_DAY) {
                (true, true) => 0,
                (true, false) => value,
                (false, true) => HOURS_IN_HALF_DAY,
                (false, false) => value + HOURS_IN_HALF_DAY,
            },
        }
    }

    /// Returns the minute (0-59).
    pub fn canonical_minute(&self) -> u8 {
        self.minute.value()
    }

    /// Returns the value the hour control shows: `0..=23` or `1..=12`.
    pub fn display_hour(&self) -> u8 {
        self.hour.value()
    }

    /// Returns the hour slot bounds for the current mode.
    pub fn hour_bounds(&self) -> (u8, u8) {
        (self.hour.min(), self.hour.max())
    }

    /// Returns the meridiem in 12-hour mode, `None` in 24-hour mode.
    pub fn period(&self) -> Option<DayPeriod> {
        match self.display_mode {
            DisplayMode::H24 => None,
            DisplayMode::H12 => Some(self.meridiem.period()),
        }
    }

    /// Sets the hour of day. Hours above 23 are clamped.
    pub fn set_canonical_hour(&mut self, hour: u8) -> bool {
        let hour = hour.min(MAX_HOUR);
        if hour == self.canonical_hour() {
            return false;
        }
        self.apply_canonical_hour(hour);
        true
    }

    /// Sets the minute. Minutes above 59 are clamped.
    pub fn set_canonical_minute(&mut self, minute: u8) -> bool {
        self.minute.set_value(minute)
    }

    /// Sets the value shown by the hour control, keeping the meridiem.
    ///
    /// Used for typed input, so the noon/midnight flip does not apply.
    /// Values outside the slot range are clamped.
    pub fn set_display_hour(&mut self, value: u8) -> bool {
        let before = self.canonical_hour();
        self.hour.set_value(value);
        self.canonical_hour() != before
    }

    /// Switches between 24-hour and 12-hour presentation, preserving the time.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        if self.display_mode == mode {
            return false;
        }
        let hour = self.canonical_hour();
        self.display_mode = mode;
        let (min, max) = mode.hour_bounds();
        self.hour.set_bounds(min, max);
        self.apply_canonical_hour(hour);
        true
    }

    /// Sets AM or PM. Ignored in 24-hour mode.
    pub fn set_period(&mut self, period: DayPeriod) -> bool {
        if self.display_mode == DisplayMode::H24 {
            return false;
        }
        self.meridiem.set(period)
    }

    /// Flips AM and PM. Ignored in 24-hour mode.
    pub fn toggle_period(&mut self) -> bool {
        if self.display_mode == DisplayMode::H24 {
            return false;
        }
        self.meridiem.flip();
        true
    }

    /// Steps the hour control up by one.
    pub fn increment_hour(&mut self) -> bool {
        let before = self.canonical();
        let step = self.hour.increment();
        self.carry_hour_step(step);
        self.canonical() != before
    }

    /// Steps the hour control down by one.
    pub fn decrement_hour(&mut self) -> bool {
        let before = self.canonical();
        let step = self.hour.decrement();
        self.carry_hour_step(step);
        self.canonical() != before
    }

    /// Steps the minute control up by one, carrying into the hour on wrap.
    pub fn increment_minute(&mut self) -> bool {
        let before = self.canonical();
        if self.minute.increment().wrap == Some(Wrap::Forward) {
            let step = self.hour.increment();
            self.carry_hour_step(step);
        }
        self.canonical() != before
    }

    /// Steps the minute control down by one, borrowing from the hour on wrap.
    pub fn decrement_minute(&mut self) -> bool {
        let before = self.canonical();
        if self.minute.decrement().wrap == Some(Wrap::Backward) {
            let step = self.hour.decrement();
            self.carry_hour_step(step);
        }
        self.canonical() != before
    }

    fn carry_hour_step(&mut self, step: SlotStep) {
        if self.display_mode == DisplayMode::H12 && crosses_noon_or_midnight(step) {
            self.meridiem.flip();
        }
    }

    fn apply_canonical_hour(&mut self, hour: u8) {
        match self.display_mode {
            DisplayMode::H24 => {
                self.hour.set_value(hour);
            }
            DisplayMode::H12 => {
                let period = DayPeriod::of_hour(hour);
                let value = match hour % HOURS_IN_HALF_DAY {
                    0 => HOURS_IN_HALF_DAY,
                    value => value,
                };
                self.meridiem.set(period);
                self.hour.set_value(value);
            }
        }
    }
}

impl Default for TimeValueModel {
    fn default() -> Self {
        Self::new(DisplayMode::default(), 0, 0)
    }
}

fn crosses_noon_or_midnight(step: SlotStep) -> bool {
    let last = HOURS_IN_HALF_DAY - 1;
    (step.old == last && step.new == HOURS_IN_HALF_DAY)
        || (step.old == HOURS_IN_HALF_DAY && step.new == last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_time_rejects_out_of_range() {
        assert!(CanonicalTime::new(23, 59).is_ok());
        assert!(matches!(
            CanonicalTime::new(24, 0),
            Err(TimePickerError::HourOutOfRange(24))
        ));
        assert!(matches!(
            CanonicalTime::new(0, 60),
            Err(TimePickerError::MinuteOutOfRange(60))
        ));
        assert_eq!(CanonicalTime::clamped(99, 99), CanonicalTime::new(23, 59).expect("valid time"));
    }

    #[test]
    fn hour_round_trips_in_both_modes() {
        for mode in [DisplayMode::H24, DisplayMode::H12] {
            let mut model = TimeValueModel::new(mode, 6, 0);
            for hour in 0..=23 {
                model.set_canonical_hour(hour);
                assert_eq!(model.canonical_hour(), hour, "mode {mode:?}");
            }
        }
    }

    #[test]
    fn twelve_hour_boundary_mapping() {
        let cases = [
            (0, 12, DayPeriod::Am),
            (12, 12, DayPeriod::Pm),
            (13, 1, DayPeriod::Pm),
            (23, 11, DayPeriod::Pm),
            (11, 11, DayPeriod::Am),
        ];
        for (hour, display, period) in cases {
            let model = TimeValueModel::new(DisplayMode::H12, hour, 0);
            assert_eq!(model.display_hour(), display, "hour {hour}");
            assert_eq!(model.period(), Some(period), "hour {hour}");
        }
    }

    #[test]
    fn setters_report_no_change_for_current_value() {
        let mut model = TimeValueModel::new(DisplayMode::H12, 14, 20);
        assert!(!model.set_canonical_hour(14));
        assert!(!model.set_canonical_minute(20));
        assert!(model.set_canonical_hour(2));
        assert_eq!(model.period(), Some(DayPeriod::Am));
    }

    #[test]
    fn minute_increment_carries_into_hour() {
        let mut model = TimeValueModel::new(DisplayMode::H24, 10, 59);
        assert!(model.increment_minute());
        assert_eq!(model.canonical(), CanonicalTime::new(11, 0).expect("valid time"));

        assert!(model.decrement_minute());
        assert_eq!(model.canonical(), CanonicalTime::new(10, 59).expect("valid time"));
    }

    #[test]
    fn minute_carry_flips_meridiem_across_noon() {
        let mut model = TimeValueModel::new(DisplayMode::H12, 11, 59);
        model.increment_minute();
        assert_eq!(model.canonical(), CanonicalTime::new(12, 0).expect("valid time"));
        assert_eq!(model.period(), Some(DayPeriod::Pm));

        model.decrement_minute();
        assert_eq!(model.canonical(), CanonicalTime::new(11, 59).expect("valid time"));
        assert_eq!(model.period(), Some(DayPeriod::Am));
    }

    #[test]
    fn minute_carry_flips_meridiem_across_midnight() {
        let mut model = TimeValueModel::new(DisplayMode::H12, 23, 59);
        model.increment_minute();
        assert_eq!(model.canonical(), CanonicalTime::MIDNIGHT);
        assert_eq!(model.display_hour(), 12);

        model.decrement_minute();
        assert_eq!(model.canonical(), CanonicalTime::new(23, 59).expect("valid time"));
    }

    #[test]
    fn hour_wrap_between_twelve_and_one_keeps_meridiem() {
        let mut model = TimeValueModel::new(DisplayMode::H12, 12, 0);
        model.increment_hour();
        assert_eq!(model.canonical_hour(), 13);
        model.decrement_hour();
        model.decrement_hour();
        assert_eq!(model.canonical_hour(), 11);
        assert_eq!(model.period(), Some(DayPeriod::Am));
    }

    #[test]
    fn hour_wraps_at_midnight_in_24_hour_mode() {
        let mut model = TimeValueModel::new(DisplayMode::H24, 23, 0);
        model.increment_hour();
        assert_eq!(model.canonical_hour(), 0);
        model.decrement_hour();
        assert_eq!(model.canonical_hour(), 23);
    }

    #[test]
    fn mode_switch_preserves_canonical_time() {
        let mut model = TimeValueModel::new(DisplayMode::H24, 0, 0);
        model.set_canonical_hour(15);
        assert!(model.set_display_mode(DisplayMode::H12));
        assert_eq!(model.canonical_hour(), 15);
        assert_eq!(model.display_hour(), 3);
        assert_eq!(model.period(), Some(DayPeriod::Pm));
        assert!(!model.set_display_mode(DisplayMode::H12));
    }

    #[test]
    fn midnight_scenario_across_mode_switches() {
        let mut model = TimeValueModel::new(DisplayMode::H24, 23, 59);
        model.increment_minute();
        assert_eq!(model.canonical(), CanonicalTime::MIDNIGHT);

        model.set_display_mode(DisplayMode::H12);
        assert_eq!(model.display_hour(), 12);
        assert_eq!(model.period(), Some(DayPeriod::Am));

        model.set_display_mode(DisplayMode::H24);
        assert_eq!(model.canonical_hour(), 0);
        assert_eq!(model.period(), None);
    }

    #[test]
    fn display_hour_keeps_meridiem() {
        let mut model = TimeValueModel::new(DisplayMode::H12, 15, 0);
        assert!(model.set_display_hour(12));
        assert_eq!(model.canonical_hour(), 12);
        assert!(model.set_display_hour(11));
        assert_eq!(model.canonical_hour(), 23);
    }

    #[test]
    fn period_changes_are_ignored_in_24_hour_mode() {
        let mut model = TimeValueModel::new(DisplayMode::H24, 9, 0);
        assert!(!model.toggle_period());
        assert!(!model.set_period(DayPeriod::Pm));
        assert_eq!(model.canonical_hour(), 9);

        model.set_display_mode(DisplayMode::H12);
        assert!(model.toggle_period());
        assert_eq!(model.canonical_hour(), 21);
        assert!(!model.set_period(DayPeriod::Pm));
    }
}
