use crate::models::DisabledRange;
use chrono::NaiveDate;

/// Configuration surface of a calendar date picker.
/// The page controller only talks to pickers through this trait, so a real
/// widget binding and the in-memory model are interchangeable.
pub trait DatePicker {
    /// Replace the ranges the picker refuses to select
    fn set_disabled(&mut self, ranges: &[DisabledRange]);

    /// Earliest selectable date
    fn set_min_date(&mut self, date: NaiveDate);

    /// Preselect a date, bypassing user-facing restrictions
    fn set_date(&mut self, date: Option<NaiveDate>);

    /// Currently selected date, if any
    fn selected_date(&self) -> Option<NaiveDate>;
}
