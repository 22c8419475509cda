use crate::models::{BookingMap, BookingPeriod, DisabledRange};
use chrono::NaiveDate;
use tracing::debug;

/// Range that blocks every date a picker can show
pub fn universal_block() -> Vec<DisabledRange> {
    vec![DisabledRange {
        from: sentinel(1900, 1, 1),
        to: sentinel(9999, 12, 31),
    }]
}

fn sentinel(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sentinel dates are valid calendar dates")
}

/// Booking data as seen by the page: either still in flight or loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BookingData {
    #[default]
    NotLoaded,
    Loaded(BookingMap),
}

impl BookingData {
    fn periods(&self, property_id: &str) -> Option<&[BookingPeriod]> {
        match self {
            BookingData::NotLoaded => None,
            BookingData::Loaded(map) => map.get(property_id).map(Vec::as_slice),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, BookingData::Loaded(_))
    }
}

/// Derives the disabled date ranges for the rental pickers
#[derive(Debug, Clone, Default)]
pub struct AvailabilityCalculator {
    bookings: BookingData,
}

impl AvailabilityCalculator {
    pub fn new(bookings: BookingData) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &BookingData {
        &self.bookings
    }

    pub fn set_bookings(&mut self, bookings: BookingMap) {
        debug!("Booking map loaded with {} houses", bookings.len());
        self.bookings = BookingData::Loaded(bookings);
    }

    /// Disabled ranges for the add-rental pickers.
    ///
    /// No selection, an unloaded map, or a house missing from the map all block
    /// every date. A house with no bookings leaves every date open. Otherwise
    /// each booked period becomes one range, in the order it was loaded.
    pub fn recompute_disabled_ranges(&self, selected: Option<&str>) -> Vec<DisabledRange> {
        let Some(property_id) = selected else {
            return universal_block();
        };

        match self.bookings.periods(property_id) {
            None => universal_block(),
            Some(periods) => periods.iter().map(DisabledRange::from).collect(),
        }
    }

    /// Disabled ranges for the edit pickers of an existing rental.
    ///
    /// Returns `None` when the house has no entry, in which case the pickers keep
    /// their current configuration. The period matching the rental being edited
    /// is left out so the rental can be moved within its own span.
    pub fn edit_disabled_ranges(
        &self,
        property_id: &str,
        current_start: NaiveDate,
        current_end: NaiveDate,
    ) -> Option<Vec<DisabledRange>> {
        let periods = self.bookings.periods(property_id)?;

        Some(
            periods
                .iter()
                .filter(|p| p.start_date != current_start || p.end_date != current_end)
                .map(DisabledRange::from)
                .collect(),
        )
    }
}
