use crate::models::DisabledRange;
use crate::pickers::traits::DatePicker;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// In-memory picker that enforces its own disabled ranges and minimum date
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PickerState {
    pub disabled: Vec<DisabledRange>,
    pub min_date: Option<NaiveDate>,
    pub selected: Option<NaiveDate>,
}

impl PickerState {
    /// Picker whose earliest selectable date is `today`
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            min_date: Some(today),
            ..Self::default()
        }
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        if self.min_date.is_some_and(|min| date < min) {
            return false;
        }
        !self.disabled.iter().any(|range| range.contains(date))
    }

    /// User selection; refused dates leave the previous selection in place
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if !self.is_selectable(date) {
            debug!("Refused selection of {}", date);
            return false;
        }
        self.selected = Some(date);
        true
    }
}

impl DatePicker for PickerState {
    fn set_disabled(&mut self, ranges: &[DisabledRange]) {
        self.disabled = ranges.to_vec();
    }

    fn set_min_date(&mut self, date: NaiveDate) {
        self.min_date = Some(date);
    }

    fn set_date(&mut self, date: Option<NaiveDate>) {
        self.selected = date;
    }

    fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }
}
