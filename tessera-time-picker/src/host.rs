//! The view-side services a [`TimePickerController`] drives.
//!
//! The controller decides *what* should happen (show the keyboard, move focus
//! to the minute field, swap the stepper controls for text fields); the host
//! owns the widgets that make it happen. Every method defaults to a no-op so
//! a host only implements what its platform supports.
//!
//! [`TimePickerController`]: crate::controller::TimePickerController

use crate::meridiem::DayPeriod;

/// One of the two editable time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour field.
    Hour,
    /// The minute field.
    Minute,
}

/// A focusable element of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The stepper control for a field.
    Control(TimeField),
    /// The text field overlaying a control.
    Text(TimeField),
}

/// View-side collaborator of the picker.
pub trait InputHost {
    /// Show the on-screen keyboard for `field`.
    fn show_keyboard(&mut self, field: TimeField) {
        let _ = field;
    }

    /// Hide the on-screen keyboard.
    fn hide_keyboard(&mut self) {}

    /// Give input focus to `target`.
    fn request_focus(&mut self, target: FocusTarget) {
        let _ = target;
    }

    /// Drop input focus from `target`.
    fn clear_focus(&mut self, target: FocusTarget) {
        let _ = target;
    }

    /// Select the whole text of `field`.
    fn select_all(&mut self, field: TimeField) {
        let _ = field;
    }

    /// Show the text fields in place of the stepper controls, or restore the
    /// controls.
    fn set_text_overlay_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Replace the content of the text field for `field`.
    fn set_field_text(&mut self, field: TimeField, text: &str) {
        let _ = (field, text);
    }

    /// Re-render the AM/PM indicator; `None` hides it (24-hour mode).
    fn set_period_indicator(&mut self, period: Option<DayPeriod>) {
        let _ = period;
    }

    /// Announce a description of the selected time to accessibility services.
    fn announce(&mut self, utterance: &str) {
        let _ = utterance;
    }
}

/// Host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl InputHost for NoopHost {}
