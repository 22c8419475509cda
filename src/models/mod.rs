use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a rentable house, as it appears in the booking map keys
pub type PropertyId = String;

/// Booked periods keyed by house id, as embedded in the rentals page
pub type BookingMap = HashMap<PropertyId, Vec<BookingPeriod>>;

/// Closed date interval during which a house is already reserved
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingPeriod {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self { start_date, end_date }
    }
}

/// Closed range a date picker must refuse to select
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisabledRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DisabledRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

impl From<&BookingPeriod> for DisabledRange {
    fn from(period: &BookingPeriod) -> Self {
        Self {
            from: period.start_date,
            to: period.end_date,
        }
    }
}

/// Guest record from `/api/clients/show`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// House record from `/api/houses/show`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Rental record from `/api/rentals/show`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i64,
    pub house: House,
    pub client: Client,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub summary_price: Option<f64>,
}

impl Rental {
    pub fn period(&self) -> BookingPeriod {
        BookingPeriod::new(self.start_date, self.end_date)
    }
}

/// Reference to an existing entity by id only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    pub id: i64,
}

/// Body of `POST /api/rentals`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRental {
    pub client: EntityRef,
    pub house: EntityRef,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query of `PUT /api/rentals/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalDatesUpdate {
    pub rental_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Choices offered by the add-rental form selects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOptions {
    pub clients: Vec<Client>,
    pub houses: Vec<House>,
}
