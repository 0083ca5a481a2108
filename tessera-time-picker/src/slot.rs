//! Bounded integer values that wrap around when stepped past either end.
//!
//! A [`WrappingSlot`] backs one spinner-like control (the hour or the minute).
//! Stepping it reports whether the value wrapped so the owner can carry the
//! change into a neighbouring slot.

/// Direction of a wrap produced by a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// The value rolled over from `max` to `min`.
    Forward,
    /// The value rolled under from `min` to `max`.
    Backward,
}

/// Result of stepping a [`WrappingSlot`] by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStep {
    /// Value before the step.
    pub old: u8,
    /// Value after the step.
    pub new: u8,
    /// Set when the step crossed the end of the range.
    pub wrap: Option<Wrap>,
}

/// A value kept within `min..=max` that wraps on increment and decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingSlot {
    value: u8,
    min: u8,
    max: u8,
}

impl WrappingSlot {
    /// Creates a slot, clamping `value` into the range.
    ///
    /// Reversed bounds are swapped so the invariant `min <= value <= max`
    /// always holds.
    pub fn new(min: u8, max: u8, value: u8) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    /// Returns the current value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the lower bound.
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> u8 {
        self.max
    }

    /// Sets the value, clamped to the range. Returns `true` if it changed.
    pub fn set_value(&mut self, value: u8) -> bool {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Replaces the bounds and clamps the current value into them.
    pub fn set_bounds(&mut self, min: u8, max: u8) {
        *self = Self::new(min, max, self.value);
    }

    /// Steps the value up by one, wrapping from `max` to `min`.
    pub fn increment(&mut self) -> SlotStep {
        let old = self.value;
        let (new, wrap) = if old >= self.max {
            (self.min, Some(Wrap::Forward))
        } else {
            (old + 1, None)
        };
        self.value = new;
        SlotStep { old, new, wrap }
    }

    /// Steps the value down by one, wrapping from `min` to `max`.
    pub fn decrement(&mut self) -> SlotStep {
        let old = self.value;
        let (new, wrap) = if old <= self.min {
            (self.max, Some(Wrap::Backward))
        } else {
            (old - 1, None)
        };
        self.value = new;
        SlotStep { old, new, wrap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_and_normalizes_bounds() {
        let slot = WrappingSlot::new(12, 1, 30);
        assert_eq!(slot.min(), 1);
        assert_eq!(slot.max(), 12);
        assert_eq!(slot.value(), 12);

        let slot = WrappingSlot::new(1, 12, 0);
        assert_eq!(slot.value(), 1);
    }

    #[test]
    fn increment_wraps_forward() {
        let mut slot = WrappingSlot::new(0, 59, 58);
        assert_eq!(
            slot.increment(),
            SlotStep {
                old: 58,
                new: 59,
                wrap: None
            }
        );
        assert_eq!(
            slot.increment(),
            SlotStep {
                old: 59,
                new: 0,
                wrap: Some(Wrap::Forward)
            }
        );
    }

    #[test]
    fn decrement_wraps_backward() {
        let mut slot = WrappingSlot::new(1, 12, 1);
        let step = slot.decrement();
        assert_eq!(step.new, 12);
        assert_eq!(step.wrap, Some(Wrap::Backward));
        assert_eq!(slot.decrement().new, 11);
    }

    #[test]
    fn set_value_reports_change() {
        let mut slot = WrappingSlot::new(0, 23, 5);
        assert!(!slot.set_value(5));
        assert!(slot.set_value(40));
        assert_eq!(slot.value(), 23);
    }

    #[test]
    fn set_bounds_clamps_existing_value() {
        let mut slot = WrappingSlot::new(0, 23, 0);
        slot.set_bounds(1, 12);
        assert_eq!(slot.value(), 1);
        assert_eq!((slot.min(), slot.max()), (1, 12));
    }
}
