use crate::availability::{AvailabilityCalculator, BookingData};
use crate::models::{
    BookingMap, DisabledRange, EntityRef, NewRental, PropertyId, Rental, RentalDatesUpdate,
};
use crate::pickers::{DatePicker, PickerState};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Dialogs on the rentals page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddRental,
    EditRental,
    ConfirmDelete,
}

/// The four calendar widgets of the rentals page
#[derive(Debug, Clone)]
pub struct Pickers<P> {
    pub add_start: P,
    pub add_end: P,
    pub edit_start: P,
    pub edit_end: P,
}

impl Pickers<PickerState> {
    /// In-memory pickers that refuse dates before `today`
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            add_start: PickerState::starting(today),
            add_end: PickerState::starting(today),
            edit_start: PickerState::starting(today),
            edit_end: PickerState::starting(today),
        }
    }
}

/// Page controller for the rentals screen.
///
/// Owns the selection state and booking data, and turns UI events into
/// availability recomputations pushed into the pickers. Constructed once per
/// page load; nothing here touches the network.
#[derive(Debug)]
pub struct RentalsPage<P: DatePicker> {
    calculator: AvailabilityCalculator,
    selected_property: Option<PropertyId>,
    pickers: Pickers<P>,
    open_modal: Option<Modal>,
    editing_rental: Option<i64>,
    pending_delete: Option<i64>,
}

impl<P: DatePicker> RentalsPage<P> {
    /// Build the page and block every date until a house is chosen
    pub fn new(bookings: BookingData, pickers: Pickers<P>) -> Self {
        let mut page = Self {
            calculator: AvailabilityCalculator::new(bookings),
            selected_property: None,
            pickers,
            open_modal: None,
            editing_rental: None,
            pending_delete: None,
        };
        page.recompute();
        page
    }

    pub fn pickers(&self) -> &Pickers<P> {
        &self.pickers
    }

    pub fn pickers_mut(&mut self) -> &mut Pickers<P> {
        &mut self.pickers
    }

    pub fn selected_property(&self) -> Option<&str> {
        self.selected_property.as_deref()
    }

    pub fn open_modal_kind(&self) -> Option<Modal> {
        self.open_modal
    }

    pub fn bookings_loaded(&self) -> bool {
        self.calculator.bookings().is_loaded()
    }

    /// Current disabled ranges for the add-rental pickers
    pub fn disabled_ranges(&self) -> Vec<DisabledRange> {
        self.calculator
            .recompute_disabled_ranges(self.selected_property.as_deref())
    }

    fn recompute(&mut self) {
        let ranges = self.disabled_ranges();
        debug!(
            "Recomputed {} disabled ranges for house {:?}",
            ranges.len(),
            self.selected_property
        );
        self.pickers.add_start.set_disabled(&ranges);
        self.pickers.add_end.set_disabled(&ranges);
    }

    /// The one-time booking load finished
    pub fn on_bookings_loaded(&mut self, bookings: BookingMap) {
        info!("Loaded booked periods for {} houses", bookings.len());
        self.calculator.set_bookings(bookings);
        self.recompute();
    }

    /// House select changed; an empty value means no house
    pub fn on_property_selected(&mut self, value: &str) {
        let value = value.trim();
        self.selected_property = (!value.is_empty()).then(|| value.to_string());
        self.recompute();
    }

    /// Start date chosen on the add form; the end date cannot precede it
    pub fn on_start_date_changed(&mut self, date: NaiveDate) {
        self.pickers.add_end.set_min_date(date);
    }

    /// Start date chosen on the edit form
    pub fn on_edit_start_date_changed(&mut self, date: NaiveDate) {
        self.pickers.edit_end.set_min_date(date);
    }

    pub fn open_modal(&mut self, modal: Modal) {
        debug!("Opening {:?}", modal);
        self.open_modal = Some(modal);

        if modal == Modal::AddRental {
            self.selected_property = None;
            self.recompute();
        }
    }

    pub fn close_modal(&mut self, modal: Modal) {
        if self.open_modal == Some(modal) {
            self.open_modal = None;
        }

        match modal {
            Modal::AddRental => {
                self.pickers.add_start.set_date(None);
                self.pickers.add_end.set_date(None);
            }
            Modal::EditRental => self.editing_rental = None,
            Modal::ConfirmDelete => self.pending_delete = None,
        }
    }

    /// Validated body for creating a rental from the add form
    pub fn build_new_rental(&self, client_id: &str) -> Result<NewRental> {
        let client_id = client_id.trim();
        let (Some(house_id), Some(start_date), Some(end_date)) = (
            self.selected_property.as_deref(),
            self.pickers.add_start.selected_date(),
            self.pickers.add_end.selected_date(),
        ) else {
            bail!("all fields are required");
        };
        if client_id.is_empty() {
            bail!("all fields are required");
        }

        let client_id: i64 = client_id
            .parse()
            .with_context(|| format!("Invalid client id: {}", client_id))?;
        let house_id: i64 = house_id
            .parse()
            .with_context(|| format!("Invalid house id: {}", house_id))?;

        Ok(NewRental {
            client: EntityRef { id: client_id },
            house: EntityRef { id: house_id },
            start_date,
            end_date,
        })
    }

    /// Prefill the edit form for `rental` and open it
    pub fn open_edit(&mut self, rental: &Rental) {
        self.editing_rental = Some(rental.id);
        self.pickers.edit_start.set_date(Some(rental.start_date));
        self.pickers.edit_end.set_date(Some(rental.end_date));

        let house_id = rental.house.id.to_string();
        if let Some(ranges) =
            self.calculator
                .edit_disabled_ranges(&house_id, rental.start_date, rental.end_date)
        {
            self.pickers.edit_start.set_disabled(&ranges);
            self.pickers.edit_end.set_disabled(&ranges);
        }

        self.open_modal(Modal::EditRental);
    }

    /// Validated date change for the rental open in the edit form
    pub fn build_dates_update(&self) -> Result<RentalDatesUpdate> {
        let (Some(rental_id), Some(start_date), Some(end_date)) = (
            self.editing_rental,
            self.pickers.edit_start.selected_date(),
            self.pickers.edit_end.selected_date(),
        ) else {
            bail!("all fields are required");
        };

        Ok(RentalDatesUpdate {
            rental_id,
            start_date,
            end_date,
        })
    }

    pub fn confirm_delete(&mut self, rental_id: i64) {
        self.pending_delete = Some(rental_id);
        self.open_modal(Modal::ConfirmDelete);
    }

    /// Rental awaiting deletion; cleared once taken
    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}
