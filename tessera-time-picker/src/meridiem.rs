//! AM/PM state for the 12-hour clock face.

/// Indicates whether the selected time is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

impl DayPeriod {
    /// Returns the period a 24-hour clock hour falls in.
    pub fn of_hour(hour: u8) -> Self {
        if hour >= 12 { DayPeriod::Pm } else { DayPeriod::Am }
    }

    /// Returns the opposite period.
    pub fn flipped(self) -> Self {
        match self {
            DayPeriod::Am => DayPeriod::Pm,
            DayPeriod::Pm => DayPeriod::Am,
        }
    }
}

/// The AM/PM flag of a 12-hour time.
///
/// Only the model mutates it, through [`MeridiemState::flip`] and
/// [`MeridiemState::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeridiemState {
    is_am: bool,
}

impl MeridiemState {
    /// Creates a meridiem state for `period`.
    pub fn new(period: DayPeriod) -> Self {
        Self {
            is_am: period == DayPeriod::Am,
        }
    }

    /// Returns whether the state is AM.
    pub fn is_am(&self) -> bool {
        self.is_am
    }

    /// Returns the current period.
    pub fn period(&self) -> DayPeriod {
        if self.is_am { DayPeriod::Am } else { DayPeriod::Pm }
    }

    /// Switches AM to PM and back.
    pub fn flip(&mut self) {
        self.is_am = !self.is_am;
    }

    /// Sets the period. Returns `true` if it changed.
    pub fn set(&mut self, period: DayPeriod) -> bool {
        let is_am = period == DayPeriod::Am;
        if self.is_am == is_am {
            return false;
        }
        self.is_am = is_am;
        true
    }
}

impl Default for MeridiemState {
    fn default() -> Self {
        Self::new(DayPeriod::Am)
    }
}

/// Localized AM/PM labels, resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeridiemLabels {
    /// Label shown for [`DayPeriod::Am`].
    pub am: String,
    /// Label shown for [`DayPeriod::Pm`].
    pub pm: String,
}

impl MeridiemLabels {
    /// Creates a label pair.
    pub fn new(am: impl Into<String>, pm: impl Into<String>) -> Self {
        Self {
            am: am.into(),
            pm: pm.into(),
        }
    }

    /// Returns the label for `period`.
    pub fn label(&self, period: DayPeriod) -> &str {
        match period {
            DayPeriod::Am => &self.am,
            DayPeriod::Pm => &self.pm,
        }
    }
}

impl Default for MeridiemLabels {
    fn default() -> Self {
        Self::new("AM", "PM")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_of_hour_splits_at_noon() {
        assert_eq!(DayPeriod::of_hour(0), DayPeriod::Am);
        assert_eq!(DayPeriod::of_hour(11), DayPeriod::Am);
        assert_eq!(DayPeriod::of_hour(12), DayPeriod::Pm);
        assert_eq!(DayPeriod::of_hour(23), DayPeriod::Pm);
    }

    #[test]
    fn flip_and_set() {
        let mut state = MeridiemState::default();
        assert!(state.is_am());
        state.flip();
        assert_eq!(state.period(), DayPeriod::Pm);
        assert!(!state.set(DayPeriod::Pm));
        assert!(state.set(DayPeriod::Am));
        assert_eq!(state.period(), DayPeriod::Pm.flipped());
    }

    #[test]
    fn labels_follow_period() {
        let labels = MeridiemLabels::new("vorm.", "nachm.");
        assert_eq!(labels.label(DayPeriod::Am), "vorm.");
        assert_eq!(labels.label(DayPeriod::Pm), "nachm.");
    }
}
