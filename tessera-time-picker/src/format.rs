//! Text shown by the controls and read out to accessibility services.

use crate::{
    meridiem::MeridiemLabels,
    model::{DisplayMode, TimeValueModel},
};

pub(crate) fn format_two_digit(value: u8) -> String {
    format!("{value:02}")
}

/// Hour text for the control: zero-padded in 24-hour mode, plain in 12-hour
/// mode.
pub(crate) fn format_hour(model: &TimeValueModel) -> String {
    match model.display_mode() {
        DisplayMode::H24 => format_two_digit(model.display_hour()),
        DisplayMode::H12 => model.display_hour().to_string(),
    }
}

pub(crate) fn format_minute(model: &TimeValueModel) -> String {
    format_two_digit(model.canonical_minute())
}

/// Spoken form of the time, `"3:05 PM"` or `"07:05"`.
pub(crate) fn describe(model: &TimeValueModel, labels: &MeridiemLabels) -> String {
    let minute = format_minute(model);
    match model.period() {
        Some(period) => format!("{}:{minute} {}", model.display_hour(), labels.label(period)),
        None => format!("{}:{minute}", format_two_digit(model.display_hour())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_padding_depends_on_mode() {
        let model = TimeValueModel::new(DisplayMode::H24, 7, 5);
        assert_eq!(format_hour(&model), "07");
        assert_eq!(format_minute(&model), "05");

        let model = TimeValueModel::new(DisplayMode::H12, 7, 5);
        assert_eq!(format_hour(&model), "7");
    }

    #[test]
    fn description_includes_period_label() {
        let labels = MeridiemLabels::default();
        let model = TimeValueModel::new(DisplayMode::H12, 15, 5);
        assert_eq!(describe(&model, &labels), "3:05 PM");

        let model = TimeValueModel::new(DisplayMode::H24, 15, 5);
        assert_eq!(describe(&model, &labels), "15:05");

        let model = TimeValueModel::new(DisplayMode::H12, 0, 0);
        assert_eq!(describe(&model, &labels), "12:00 AM");

        let model = TimeValueModel::new(DisplayMode::H24, 7, 5);
        assert_eq!(describe(&model, &labels), "07:05");
    }
}
