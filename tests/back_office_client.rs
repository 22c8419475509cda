use chrono::NaiveDate;
use guesthouse_desk::models::{EntityRef, NewRental, RentalDatesUpdate};
use guesthouse_desk::sources::{BackOfficeClient, BookingSource};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn client_for(server: &MockServer, csrf: Option<&str>) -> BackOfficeClient {
    BackOfficeClient::with_base_url(
        &server.uri(),
        Duration::from_secs(5),
        csrf.map(str::to_string),
    )
    .expect("client should build")
}

fn rental_json(id: i64, house_id: i64, start: &str, end: &str) -> serde_json::Value {
    json!({
        "id": id,
        "house": {"id": house_id, "name": "Лесной", "price": 4500},
        "client": {"id": 2, "name": "Иванов", "phoneNumber": "89161234567"},
        "startDate": start,
        "endDate": end,
        "summaryPrice": 13500
    })
}

async fn mount_listings(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/rentals/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            rental_json(1, 7, "2024-06-01", "2024-06-05"),
            rental_json(2, 7, "2024-06-10", "2024-06-10"),
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/houses/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Лесной", "price": 4500},
            {"id": 8, "name": "Озёрный", "price": 3900.5}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn loads_bookings_grouped_by_house() {
    let server = MockServer::start().await;
    mount_listings(&server).await;

    let bookings = client_for(&server, None).load_bookings().await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings["7"].len(), 2);
    assert_eq!(bookings["7"][1].start_date, date("2024-06-10"));
    assert!(bookings["8"].is_empty());
}

#[tokio::test]
async fn booking_load_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rentals/show"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/houses/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client_for(&server, None).load_bookings().await.unwrap_err();
    assert!(format!("{:#}", err).contains("boom"));
}

#[tokio::test]
async fn loads_form_options_in_parallel() {
    let server = MockServer::start().await;
    mount_listings(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/clients/show"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Иванов", "phoneNumber": "89161234567"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let options = client_for(&server, None).load_form_options().await.unwrap();

    assert_eq!(options.clients.len(), 1);
    assert_eq!(options.clients[0].phone_number.as_deref(), Some("89161234567"));
    assert_eq!(options.houses.len(), 2);
    assert_eq!(options.houses[1].price, Some(3900.5));
}

#[tokio::test]
async fn creates_rental_with_csrf_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rentals"))
        .and(header("X-CSRF-TOKEN", "token-1"))
        .and(body_json(json!({
            "client": {"id": 2},
            "house": {"id": 7},
            "startDate": "2024-06-10",
            "endDate": "2024-06-12"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let rental = NewRental {
        client: EntityRef { id: 2 },
        house: EntityRef { id: 7 },
        start_date: date("2024-06-10"),
        end_date: date("2024-06-12"),
    };
    client_for(&server, Some("token-1"))
        .create_rental(&rental)
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_rental_reports_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rentals"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Дом уже занят"))
        .mount(&server)
        .await;

    let rental = NewRental {
        client: EntityRef { id: 2 },
        house: EntityRef { id: 7 },
        start_date: date("2024-06-01"),
        end_date: date("2024-06-02"),
    };
    let err = client_for(&server, None)
        .create_rental(&rental)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Дом уже занят"));
}

#[tokio::test]
async fn updates_rental_dates_via_query() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/rentals/11"))
        .and(query_param("startDate", "2024-06-02"))
        .and(query_param("endDate", "2024-06-06"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let update = RentalDatesUpdate {
        rental_id: 11,
        start_date: date("2024-06-02"),
        end_date: date("2024-06-06"),
    };
    client_for(&server, None)
        .update_rental_dates(&update)
        .await
        .unwrap();
}

#[tokio::test]
async fn deletes_rental() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/rentals/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, None).delete_rental(5).await.unwrap();
}
