//! Keystroke validation for the numeric text fields.
//!
//! A [`RangeFilter`] looks at the text a field *would* contain after an edit
//! and accepts the edit only if that text is a number inside the field's
//! range. Partial input that can still grow into a valid value (a lone `1`
//! on the way to `12`) passes because the check uses the prospective value.

use unicode_segmentation::UnicodeSegmentation;

const FRACTION_SEPARATOR: &str = ".";
const GROUP_SEPARATOR: char = ',';
const CURRENCY_SIGN: char = '€';
const MAX_FRACTION_DIGITS: usize = 2;

/// A single edit applied to a field's text.
///
/// `start..end` are byte offsets of the replaced range in the current text;
/// an empty range is a plain insertion and an empty `inserted` is a deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Start of the replaced range.
    pub start: usize,
    /// End of the replaced range.
    pub end: usize,
    /// Text inserted in place of the range.
    pub inserted: String,
}

impl TextEdit {
    /// Inserts `text` at `offset`.
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            start: offset,
            end: offset,
            inserted: text.into(),
        }
    }

    /// Replaces `start..end` with `text`.
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            inserted: text.into(),
        }
    }

    /// Deletes `start..end`.
    pub fn delete(start: usize, end: usize) -> Self {
        Self::replace(start, end, String::new())
    }

    /// Applies the edit to `current`, returning `None` for offsets that do not
    /// fall on character boundaries inside the text.
    pub fn apply(&self, current: &str) -> Option<String> {
        if self.start > self.end {
            return None;
        }
        let head = current.get(..self.start)?;
        let tail = current.get(self.end..)?;
        let mut text = String::with_capacity(head.len() + self.inserted.len() + tail.len());
        text.push_str(head);
        text.push_str(&self.inserted);
        text.push_str(tail);
        Some(text)
    }
}

/// Outcome of running an edit through a [`RangeFilter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The edit passes; holds the field text after applying it.
    Accepted(String),
    /// The edit is dropped and the field keeps its text.
    Rejected,
}

impl FilterOutcome {
    /// Returns whether the edit was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterOutcome::Accepted(_))
    }
}

/// Accepts edits whose resulting text parses to an integer in `[min, max]`.
///
/// The range is order-independent: `RangeFilter::new(12, 1, 2)` behaves like
/// `RangeFilter::new(1, 12, 2)`.
///
/// ```
/// use tessera_time_picker::filter::{FilterOutcome, RangeFilter, TextEdit};
///
/// let hours = RangeFilter::new(1, 12, 2);
/// assert!(hours.filter("", &TextEdit::insert(0, "1")).is_accepted());
/// assert_eq!(
///     hours.filter("1", &TextEdit::insert(1, "2")),
///     FilterOutcome::Accepted("12".to_string())
/// );
/// assert_eq!(hours.filter("1", &TextEdit::insert(1, "3")), FilterOutcome::Rejected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    min: u32,
    max: u32,
    max_len: usize,
}

impl RangeFilter {
    /// Creates a filter for `[a, b]` (either order) capped at `max_len`
    /// characters.
    pub fn new(a: u32, b: u32, max_len: usize) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            max_len,
        }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the length cap in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns whether `value` is inside the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Validates `edit` against the field text `current`.
    pub fn filter(&self, current: &str, edit: &TextEdit) -> FilterOutcome {
        let Some(prospective) = edit.apply(current) else {
            return FilterOutcome::Rejected;
        };
        if edit.inserted.is_empty() {
            return FilterOutcome::Accepted(prospective);
        }
        if edit.inserted == FRACTION_SEPARATOR {
            return FilterOutcome::Rejected;
        }
        if let Some((_, fraction)) = prospective.split_once(GROUP_SEPARATOR) {
            if fraction.chars().count() > MAX_FRACTION_DIGITS {
                return FilterOutcome::Rejected;
            }
        }
        if prospective.graphemes(true).count() > self.max_len {
            return FilterOutcome::Rejected;
        }
        match parse_number(&prospective) {
            Some(value) if self.contains(value) => FilterOutcome::Accepted(prospective),
            _ => FilterOutcome::Rejected,
        }
    }

    /// Returns whether `text` is a complete value that no further digit can
    /// extend without leaving the range.
    pub fn is_complete(&self, text: &str) -> bool {
        let Some(value) = parse_number(text) else {
            return false;
        };
        text.graphemes(true).count() >= self.max_len || value.saturating_mul(10) > self.max
    }
}

/// Parses field text after dropping decoration: the currency sign is removed
/// and the group separator becomes a fraction separator, so only plain digit
/// strings survive.
pub(crate) fn parse_number(text: &str) -> Option<u32> {
    let normalized: String = text
        .chars()
        .filter(|&c| c != CURRENCY_SIGN)
        .map(|c| if c == GROUP_SEPARATOR { '.' } else { c })
        .collect();
    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    normalized.parse().ok()
}
