//! Headless walkthrough of the time picker.
//!
//! Drives a [`TimePickerController`] with the same events a view would send
//! (stepper taps, focus changes, keystrokes) and logs what the view would be
//! asked to do. Run with `RUST_LOG=debug` to see the controller's own spans.

use std::sync::Arc;

use jiff::civil::date;
use parking_lot::Mutex;
use tessera_time_picker::{
    CanonicalTime, DayPeriod, DisplayMode, FocusTarget, InputHost, TextEdit, TimeField,
    TimePickerArgs, TimePickerController,
};
use tracing::info;

/// Host that logs each request instead of driving real widgets.
struct ConsoleHost;

impl InputHost for ConsoleHost {
    fn show_keyboard(&mut self, field: TimeField) {
        info!(?field, "show keyboard");
    }

    fn hide_keyboard(&mut self) {
        info!("hide keyboard");
    }

    fn request_focus(&mut self, target: FocusTarget) {
        info!(?target, "focus");
    }

    fn set_text_overlay_visible(&mut self, visible: bool) {
        info!(visible, "text overlay");
    }

    fn set_period_indicator(&mut self, period: Option<DayPeriod>) {
        info!(?period, "period indicator");
    }

    fn announce(&mut self, utterance: &str) {
        info!(utterance, "announce");
    }
}

fn main() {
    init_tracing();

    let args = TimePickerArgs::default()
        .initial_hour(23)
        .initial_minute(58)
        .display_mode(DisplayMode::H12);
    let mut picker = TimePickerController::new(args, ConsoleHost);
    picker.set_calendar(date(2025, 12, 31).at(23, 58, 0, 0));

    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    picker.set_on_time_changed(move |time: CanonicalTime| sink.lock().push(time));
    picker.set_on_edit_session(|open: bool| info!(open, "edit session"));

    // Two taps on the minute stepper roll over midnight.
    picker.increment_minute();
    picker.increment_minute();
    info!(
        hour = %picker.hour_text(),
        minute = %picker.minute_text(),
        period = ?picker.period_label(),
        "after stepping"
    );

    // Type "7" then "45" through the keyboard overlay.
    picker.control_focused(TimeField::Hour);
    picker.edit_text(TimeField::Hour, TextEdit::replace(0, 2, "7"));
    picker.edit_text(TimeField::Minute, TextEdit::replace(0, 2, "4"));
    picker.edit_text(TimeField::Minute, TextEdit::insert(1, "5"));
    picker.keyboard_dismissed();

    picker.toggle_period();
    picker.set_display_mode(DisplayMode::H24);

    let saved = picker.save_state();
    info!(?saved, calendar = %picker.calendar(), "final state");
    for time in changes.lock().iter() {
        println!("{:02}:{:02}", time.hour(), time.minute());
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info,tessera_time_picker=debug") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("info"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
