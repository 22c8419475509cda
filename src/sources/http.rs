use crate::config::Settings;
use crate::format::format_iso_date;
use crate::models::{BookingMap, Client, FormOptions, House, NewRental, Rental, RentalDatesUpdate};
use crate::sources::traits::BookingSource;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// REST client for the back-office `/api/*` endpoints
#[derive(Clone)]
pub struct BackOfficeClient {
    client: reqwest::Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl BackOfficeClient {
    /// Create a client from application settings
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_base_url(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
            settings.csrf_token.clone(),
        )
    }

    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        csrf_token: Option<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("guesthouse-desk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("{} returned status: {}", action, status);
        bail!("{} failed ({}): {}", action, status, body);
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", path))?;
        let response = Self::ensure_success(response, path).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to decode response from {}", path))
    }

    pub async fn fetch_rentals(&self) -> Result<Vec<Rental>> {
        self.get_json("/api/rentals/show").await
    }

    pub async fn fetch_clients(&self) -> Result<Vec<Client>> {
        self.get_json("/api/clients/show").await
    }

    pub async fn fetch_houses(&self) -> Result<Vec<House>> {
        self.get_json("/api/houses/show").await
    }

    /// Clients and houses for the add-rental selects, fetched in parallel
    pub async fn load_form_options(&self) -> Result<FormOptions> {
        let (clients, houses) = tokio::try_join!(self.fetch_clients(), self.fetch_houses())
            .context("Failed to load rental form data")?;

        Ok(FormOptions { clients, houses })
    }

    pub async fn create_rental(&self, rental: &NewRental) -> Result<()> {
        let response = self
            .request(Method::POST, "/api/rentals")
            .json(rental)
            .send()
            .await
            .context("Failed to send new rental")?;
        Self::ensure_success(response, "Create rental").await?;

        info!(
            "Created rental for house {} from {} to {}",
            rental.house.id, rental.start_date, rental.end_date
        );
        Ok(())
    }

    pub async fn update_rental_dates(&self, update: &RentalDatesUpdate) -> Result<()> {
        let path = format!("/api/rentals/{}", update.rental_id);
        let response = self
            .request(Method::PUT, &path)
            .query(&[
                ("startDate", format_iso_date(Some(update.start_date))),
                ("endDate", format_iso_date(Some(update.end_date))),
            ])
            .send()
            .await
            .context("Failed to send rental update")?;
        Self::ensure_success(response, "Update rental").await?;

        info!("Updated dates of rental {}", update.rental_id);
        Ok(())
    }

    pub async fn delete_rental(&self, rental_id: i64) -> Result<()> {
        let path = format!("/api/rentals/{}", rental_id);
        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .context("Failed to send rental deletion")?;
        Self::ensure_success(response, "Delete rental").await?;

        info!("Deleted rental {}", rental_id);
        Ok(())
    }
}

/// Group rentals into booked periods per house.
///
/// Every known house gets an entry, empty when it has no rentals, so houses
/// without reservations read as open rather than unknown.
pub fn group_bookings(houses: &[House], rentals: &[Rental]) -> BookingMap {
    let mut map: BookingMap = houses
        .iter()
        .map(|house| (house.id.to_string(), Vec::new()))
        .collect();

    for rental in rentals {
        map.entry(rental.house.id.to_string())
            .or_default()
            .push(rental.period());
    }
    map
}

#[async_trait]
impl BookingSource for BackOfficeClient {
    async fn load_bookings(&self) -> Result<BookingMap> {
        info!("Loading booked periods from {}", self.base_url);

        let (rentals, houses) = tokio::try_join!(self.fetch_rentals(), self.fetch_houses())?;
        let map = group_bookings(&houses, &rentals);

        debug!("Grouped {} rentals across {} houses", rentals.len(), map.len());
        Ok(map)
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}
