use crate::models::BookingMap;
use anyhow::Result;
use async_trait::async_trait;

/// Where the rentals page gets its booked periods from.
/// Loaded once per page; a new reservation needs a fresh load to show up.
#[async_trait]
pub trait BookingSource: Send + Sync {
    /// Load booked periods for every house
    async fn load_bookings(&self) -> Result<BookingMap>;

    /// Get the name of the booking source
    fn source_name(&self) -> &'static str;
}
