//! Reconciles stepper input and keyboard entry into one time value.
//!
//! ## Usage
//!
//! Forward view events (control taps, focus changes, text edits, IME
//! actions) to a [`TimePickerController`]; it updates its
//! [`TimeValueModel`], tells the [`InputHost`] which widgets to show and
//! focus, and reports committed changes through the registered listeners.
//!
//! The controller is a small state machine:
//!
//! - [`InputState::Display`] shows the stepper controls.
//! - Focusing a control opens an edit session in
//!   [`InputState::EditingHour`] or [`InputState::EditingMinute`], replacing
//!   the controls with text fields.
//! - Every accepted keystroke is written to the model right away, so the
//!   controls and the text fields never disagree.
//! - Submitting, blurring the active field or dismissing the keyboard closes
//!   the session and returns to [`InputState::Display`].

use jiff::civil::DateTime;
use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    args::TimePickerArgs,
    callback::{EditSessionCallback, TimeChangedCallback},
    filter::{FilterOutcome, RangeFilter, TextEdit, parse_number},
    format::{describe, format_hour, format_minute},
    host::{FocusTarget, InputHost, NoopHost, TimeField},
    meridiem::{DayPeriod, MeridiemLabels},
    model::{CanonicalTime, DisplayMode, TimeValueModel},
    saved_state::{TimePickerSavedState, time_of, with_time},
};

const FIELD_MAX_LEN: usize = 2;
const MAX_MINUTE: u32 = 59;

/// Which surface currently takes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    /// Stepper controls are shown.
    Display,
    /// Text fields are shown and the hour field is active.
    EditingHour,
    /// Text fields are shown and the minute field is active.
    EditingMinute,
}

/// IME action delivered by a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Move on to the next field.
    Next,
    /// Finish editing.
    Done,
}

#[derive(Debug)]
struct EditSession {
    active: TimeField,
    hour_text: String,
    minute_text: String,
}

impl EditSession {
    fn text(&self, field: TimeField) -> &str {
        match field {
            TimeField::Hour => &self.hour_text,
            TimeField::Minute => &self.minute_text,
        }
    }

    fn text_mut(&mut self, field: TimeField) -> &mut String {
        match field {
            TimeField::Hour => &mut self.hour_text,
            TimeField::Minute => &mut self.minute_text,
        }
    }
}

/// Drives a time picker from control and keyboard input.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use tessera_time_picker::{
///     CanonicalTime, DisplayMode, NoopHost, TimePickerArgs, TimePickerController,
/// };
///
/// let args = TimePickerArgs::default()
///     .initial_hour(23)
///     .initial_minute(59)
///     .display_mode(DisplayMode::H24);
/// let mut picker = TimePickerController::new(args, NoopHost);
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// picker.set_on_time_changed(move |time: CanonicalTime| sink.lock().unwrap().push(time));
///
/// picker.increment_minute();
/// assert_eq!(picker.time(), CanonicalTime::MIDNIGHT);
/// assert_eq!(seen.lock().unwrap().as_slice(), &[CanonicalTime::MIDNIGHT]);
/// ```
pub struct TimePickerController<H = NoopHost> {
    model: TimeValueModel,
    session: Option<EditSession>,
    calendar: DateTime,
    labels: MeridiemLabels,
    enabled: bool,
    on_time_changed: TimeChangedCallback,
    on_edit_session: EditSessionCallback,
    host: H,
}

impl<H: InputHost> TimePickerController<H> {
    /// Creates a controller from `args`, rendering through `host`.
    pub fn new(args: TimePickerArgs, mut host: H) -> Self {
        let model = TimeValueModel::new(args.display_mode, args.initial_hour, args.initial_minute);
        let now = jiff::Zoned::now().datetime();
        let calendar = with_time(now, model.canonical()).unwrap_or(now);
        host.set_period_indicator(model.period());
        Self {
            model,
            session: None,
            calendar,
            labels: args.meridiem_labels,
            enabled: args.enabled,
            on_time_changed: TimeChangedCallback::default(),
            on_edit_session: EditSessionCallback::default(),
            host,
        }
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the underlying model.
    pub fn model(&self) -> &TimeValueModel {
        &self.model
    }

    /// Returns which surface takes input.
    pub fn state(&self) -> InputState {
        match self.session.as_ref().map(|session| session.active) {
            None => InputState::Display,
            Some(TimeField::Hour) => InputState::EditingHour,
            Some(TimeField::Minute) => InputState::EditingMinute,
        }
    }

    /// Returns the selected time.
    pub fn time(&self) -> CanonicalTime {
        self.model.canonical()
    }

    /// Returns the selected hour of day (0-23).
    pub fn hour(&self) -> u8 {
        self.model.canonical_hour()
    }

    /// Returns the selected minute (0-59).
    pub fn minute(&self) -> u8 {
        self.model.canonical_minute()
    }

    /// Registers the time change listener, replacing the previous one.
    pub fn set_on_time_changed(&mut self, listener: impl Into<TimeChangedCallback>) {
        self.on_time_changed = listener.into();
    }

    /// Registers the edit session listener, replacing the previous one.
    pub fn set_on_edit_session(&mut self, listener: impl Into<EditSessionCallback>) {
        self.on_edit_session = listener.into();
    }

    /// Returns whether the picker reacts to user input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables user input. Disabling closes an open edit session.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if !enabled {
            self.finish_editing();
        }
        self.enabled = enabled;
    }

    /// Returns the display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.model.display_mode()
    }

    /// Switches between 24-hour and 12-hour display. The selected time is
    /// kept, so no change is reported.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.model.display_mode() == mode {
            return;
        }
        self.finish_editing();
        self.model.set_display_mode(mode);
        debug!(?mode, "display mode changed");
        self.host.set_period_indicator(self.model.period());
    }

    /// Replaces the AM/PM labels.
    pub fn set_meridiem_labels(&mut self, labels: MeridiemLabels) {
        self.labels = labels;
        self.host.set_period_indicator(self.model.period());
    }

    /// Sets the hour of day. The current hour is a no-op.
    pub fn set_hour(&mut self, hour: u8) -> bool {
        self.apply(|model| model.set_canonical_hour(hour))
    }

    /// Sets the minute. The current minute is a no-op.
    pub fn set_minute(&mut self, minute: u8) -> bool {
        self.apply(|model| model.set_canonical_minute(minute))
    }

    /// Steps the hour control up.
    pub fn increment_hour(&mut self) -> bool {
        self.gesture(TimeValueModel::increment_hour)
    }

    /// Steps the hour control down.
    pub fn decrement_hour(&mut self) -> bool {
        self.gesture(TimeValueModel::decrement_hour)
    }

    /// Steps the minute control up, carrying into the hour.
    pub fn increment_minute(&mut self) -> bool {
        self.gesture(TimeValueModel::increment_minute)
    }

    /// Steps the minute control down, borrowing from the hour.
    pub fn decrement_minute(&mut self) -> bool {
        self.gesture(TimeValueModel::decrement_minute)
    }

    /// Flips AM and PM from the period control.
    pub fn toggle_period(&mut self) -> bool {
        self.gesture(TimeValueModel::toggle_period)
    }

    /// Selects AM or PM from the period control.
    pub fn set_period(&mut self, period: DayPeriod) -> bool {
        self.gesture(|model| model.set_period(period))
    }

    /// Copies hour, minute and the remaining date-time fields from
    /// `calendar` without reporting a change.
    pub fn set_calendar(&mut self, calendar: DateTime) {
        self.calendar = calendar;
        let time = time_of(calendar);
        let period = self.model.period();
        self.model.set_canonical_hour(time.hour());
        self.model.set_canonical_minute(time.minute());
        if self.model.period() != period {
            self.host.set_period_indicator(self.model.period());
        }
        self.refresh_session_text();
        debug!(%calendar, "calendar set");
    }

    /// Returns the calendar value with the selected hour and minute.
    pub fn calendar(&self) -> DateTime {
        with_time(self.calendar, self.model.canonical()).unwrap_or(self.calendar)
    }

    /// Captures the state that survives picker recreation.
    pub fn save_state(&self) -> TimePickerSavedState {
        TimePickerSavedState::from(self.model.canonical())
    }

    /// Restores a saved hour and minute; out-of-range values are clamped.
    pub fn restore_state(&mut self, saved: TimePickerSavedState) -> bool {
        let time = saved.to_time().unwrap_or_else(|err| {
            debug!(%err, "clamping restored time");
            CanonicalTime::clamped(saved.hour, saved.minute)
        });
        self.apply(|model| {
            let hour = model.set_canonical_hour(time.hour());
            let minute = model.set_canonical_minute(time.minute());
            hour || minute
        })
    }

    /// Text shown by the hour control.
    pub fn hour_text(&self) -> String {
        format_hour(&self.model)
    }

    /// Text shown by the minute control.
    pub fn minute_text(&self) -> String {
        format_minute(&self.model)
    }

    /// Label of the AM/PM control, `None` in 24-hour mode.
    pub fn period_label(&self) -> Option<&str> {
        self.model.period().map(|period| self.labels.label(period))
    }

    /// Spoken description of the selected time.
    pub fn accessibility_description(&self) -> String {
        describe(&self.model, &self.labels)
    }

    /// Returns the in-progress text of `field` while a session is open.
    pub fn edit_text_of(&self, field: TimeField) -> Option<&str> {
        self.session.as_ref().map(|session| session.text(field))
    }

    /// Opens an edit session when a stepper control gains focus.
    pub fn control_focused(&mut self, field: TimeField) {
        if !self.enabled || self.session.is_some() {
            return;
        }
        let session = EditSession {
            active: field,
            hour_text: format_hour(&self.model),
            minute_text: format_minute(&self.model),
        };
        self.host.set_text_overlay_visible(true);
        self.host.set_field_text(TimeField::Hour, &session.hour_text);
        self.host.set_field_text(TimeField::Minute, &session.minute_text);
        self.host.clear_focus(FocusTarget::Control(field));
        self.host.request_focus(FocusTarget::Text(field));
        self.host.select_all(field);
        self.host.show_keyboard(field);
        self.session = Some(session);
        debug!(?field, "edit session opened");
        self.on_edit_session.call(true);
    }

    /// Makes `field` the active text field when the user moves focus to it.
    pub fn text_field_focused(&mut self, field: TimeField) {
        if !self.enabled {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.active != field {
            session.active = field;
            self.host.select_all(field);
        }
    }

    /// Closes the session when the active text field loses focus.
    ///
    /// Blur of the other field is ignored; it happens when focus moves
    /// between the two fields.
    pub fn text_field_blurred(&mut self, field: TimeField) {
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.active == field)
        {
            self.finish_editing();
        }
    }

    /// Handles an IME action from a text field.
    pub fn editor_action(&mut self, field: TimeField, action: EditorAction) {
        if self.session.is_none() {
            return;
        }
        match (field, action) {
            (TimeField::Hour, EditorAction::Next) => self.advance_to_minute(),
            _ => self.finish_editing(),
        }
    }

    /// Closes the session when the on-screen keyboard is dismissed.
    pub fn keyboard_dismissed(&mut self) {
        self.finish_editing();
    }

    /// Applies a keystroke to a text field. Returns whether it was accepted.
    ///
    /// Accepted text is written to the model immediately. A complete hour
    /// moves focus on to the minute field.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn edit_text(&mut self, field: TimeField, edit: TextEdit) -> bool {
        if !self.enabled {
            return false;
        }
        let filter = self.filter_for(field);
        let Some(session) = self.session.as_mut() else {
            trace!("no edit session open");
            return false;
        };
        let text = match filter.filter(session.text(field), &edit) {
            FilterOutcome::Accepted(text) => text,
            FilterOutcome::Rejected => {
                trace!("edit rejected");
                return false;
            }
        };
        session.active = field;
        session.text_mut(field).clone_from(&text);

        if self.write_field(field, &text) {
            self.notify();
        }
        match field {
            TimeField::Hour if filter.is_complete(&text) => self.advance_to_minute(),
            TimeField::Minute if text.graphemes(true).count() >= FIELD_MAX_LEN => {
                self.host.select_all(TimeField::Minute);
            }
            _ => {}
        }
        true
    }

    /// Closes an open edit session and reports the committed time.
    ///
    /// The reported hour uses the picker's own AM/PM state.
    pub fn finish_editing(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.write_field(TimeField::Hour, &session.hour_text);
        self.write_field(TimeField::Minute, &session.minute_text);
        self.host.hide_keyboard();
        self.host.clear_focus(FocusTarget::Text(session.active));
        self.host.set_text_overlay_visible(false);
        self.notify();
        debug!("edit session closed");
        self.on_edit_session.call(false);
    }

    fn filter_for(&self, field: TimeField) -> RangeFilter {
        match field {
            TimeField::Hour => {
                let (min, max) = self.model.hour_bounds();
                RangeFilter::new(u32::from(min), u32::from(max), FIELD_MAX_LEN)
            }
            TimeField::Minute => RangeFilter::new(0, MAX_MINUTE, FIELD_MAX_LEN),
        }
    }

    fn advance_to_minute(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.active = TimeField::Minute;
        self.host.select_all(TimeField::Hour);
        self.host.clear_focus(FocusTarget::Text(TimeField::Hour));
        self.host.request_focus(FocusTarget::Text(TimeField::Minute));
        self.host.select_all(TimeField::Minute);
        self.host.show_keyboard(TimeField::Minute);
        debug!("advanced to minute field");
    }

    /// Writes parsed field text into the model without notifying. Empty or
    /// out-of-range text leaves the model alone.
    fn write_field(&mut self, field: TimeField, text: &str) -> bool {
        let filter = self.filter_for(field);
        let Some(value) = parse_number(text)
            .filter(|value| filter.contains(*value))
            .and_then(|value| u8::try_from(value).ok())
        else {
            trace!(?field, text, "field text not written");
            return false;
        };
        match (field, self.model.display_mode()) {
            (TimeField::Hour, DisplayMode::H12) => self.model.set_display_hour(value),
            (TimeField::Hour, DisplayMode::H24) => self.model.set_canonical_hour(value),
            (TimeField::Minute, _) => self.model.set_canonical_minute(value),
        }
    }

    fn gesture(&mut self, change: impl FnOnce(&mut TimeValueModel) -> bool) -> bool {
        if !self.enabled {
            trace!("picker disabled, gesture ignored");
            return false;
        }
        self.apply(change)
    }

    fn apply(&mut self, change: impl FnOnce(&mut TimeValueModel) -> bool) -> bool {
        let period = self.model.period();
        let changed = change(&mut self.model);
        if self.model.period() != period {
            self.host.set_period_indicator(self.model.period());
        }
        if changed {
            self.refresh_session_text();
            self.notify();
        }
        changed
    }

    fn refresh_session_text(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.hour_text = format_hour(&self.model);
        session.minute_text = format_minute(&self.model);
        self.host.set_field_text(TimeField::Hour, &session.hour_text);
        self.host.set_field_text(TimeField::Minute, &session.minute_text);
    }

    fn notify(&mut self) {
        let time = self.model.canonical();
        debug!(hour = time.hour(), minute = time.minute(), "time changed");
        let utterance = describe(&self.model, &self.labels);
        self.host.announce(&utterance);
        self.on_time_changed.call(time);
    }
}
