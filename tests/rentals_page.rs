use chrono::NaiveDate;
use guesthouse_desk::availability::{universal_block, BookingData};
use guesthouse_desk::controller::{Modal, Pickers, RentalsPage};
use guesthouse_desk::models::DisabledRange;
use guesthouse_desk::pickers::PickerState;
use guesthouse_desk::sources::{BookingSource, JsonFileSource};
use std::io::Write;

const PAGE_BOOKINGS: &str = r#"{"7": [{"startDate": "2024-06-01", "endDate": "2024-06-05"}]}"#;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn loaded_page() -> RentalsPage<PickerState> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PAGE_BOOKINGS.as_bytes()).unwrap();

    let source = JsonFileSource::new(file.path());
    let bookings = source.load_bookings().await.unwrap();

    let mut page = RentalsPage::new(BookingData::NotLoaded, Pickers::starting(date("2024-05-01")));
    page.on_bookings_loaded(bookings);
    page
}

#[tokio::test]
async fn selected_house_blocks_its_booked_period() {
    let mut page = loaded_page().await;
    page.on_property_selected("7");

    assert_eq!(
        page.disabled_ranges(),
        vec![DisabledRange {
            from: date("2024-06-01"),
            to: date("2024-06-05"),
        }]
    );
    assert!(!page.pickers_mut().add_start.select(date("2024-06-03")));
    assert!(page.pickers_mut().add_start.select(date("2024-06-06")));
}

#[tokio::test]
async fn unknown_house_blocks_everything() {
    let mut page = loaded_page().await;
    page.on_property_selected("9");

    assert_eq!(page.disabled_ranges(), universal_block());
    assert!(!page.pickers_mut().add_start.select(date("2024-08-01")));
}

#[tokio::test]
async fn reopening_add_dialog_drops_previous_house() {
    let mut page = loaded_page().await;
    page.open_modal(Modal::AddRental);
    page.on_property_selected("7");
    page.close_modal(Modal::AddRental);

    page.open_modal(Modal::AddRental);
    assert_eq!(page.selected_property(), None);
    assert_eq!(page.pickers().add_start.disabled, universal_block());
    assert_eq!(page.pickers().add_end.disabled, universal_block());
}

#[tokio::test]
async fn malformed_booking_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"7\": [{\"startDate\": \"June\"}]}").unwrap();

    let err = JsonFileSource::new(file.path())
        .load_bookings()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Malformed booking map"));
}

#[tokio::test]
async fn missing_booking_file_is_an_error() {
    let source = JsonFileSource::new("/nonexistent/booked-periods.json");
    assert_eq!(source.source_name(), "file");
    assert!(source.load_bookings().await.is_err());
}
