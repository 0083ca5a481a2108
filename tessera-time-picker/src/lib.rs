//! Time picker state for tessera-ui.
//!
//! This crate holds the part of a time picker that is independent of
//! rendering: the canonical 24-hour time, the hour/minute/AM-PM slots that
//! wrap and carry into each other, and the keyboard entry overlay that
//! validates digits as they are typed.
//!
//! # Usage
//!
//! Create a [`TimePickerController`] with [`TimePickerArgs`] and an
//! [`InputHost`] that owns the widgets, then forward view events to it.
//!
//! ```
//! use tessera_time_picker::{
//!     DisplayMode, InputState, NoopHost, TextEdit, TimeField, TimePickerArgs,
//!     TimePickerController,
//! };
//!
//! let args = TimePickerArgs::default()
//!     .initial_hour(15)
//!     .initial_minute(30)
//!     .display_mode(DisplayMode::H12);
//! let mut picker = TimePickerController::new(args, NoopHost);
//! assert_eq!(picker.hour_text(), "3");
//! assert_eq!(picker.period_label(), Some("PM"));
//!
//! // Tapping the hour control swaps in the text fields.
//! picker.control_focused(TimeField::Hour);
//! picker.edit_text(TimeField::Hour, TextEdit::replace(0, 1, "1"));
//! picker.edit_text(TimeField::Hour, TextEdit::insert(1, "1"));
//!
//! // "11" cannot grow any further, so focus moved on to the minutes.
//! assert_eq!(picker.state(), InputState::EditingMinute);
//! assert_eq!(picker.hour(), 23);
//!
//! picker.keyboard_dismissed();
//! assert_eq!(picker.state(), InputState::Display);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod args;
pub mod callback;
pub mod controller;
pub mod error;
pub mod filter;
pub mod host;
pub mod meridiem;
pub mod model;
pub mod saved_state;
pub mod slot;

mod format;

pub use args::TimePickerArgs;
pub use callback::{EditSessionCallback, Listener, TimeChangedCallback};
pub use controller::{EditorAction, InputState, TimePickerController};
pub use error::TimePickerError;
pub use filter::{FilterOutcome, RangeFilter, TextEdit};
pub use host::{FocusTarget, InputHost, NoopHost, TimeField};
pub use meridiem::{DayPeriod, MeridiemLabels, MeridiemState};
pub use model::{CanonicalTime, DisplayMode, TimeValueModel};
pub use saved_state::TimePickerSavedState;
pub use slot::{SlotStep, Wrap, WrappingSlot};
