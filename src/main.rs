use anyhow::Result;
use chrono::Local;
use clap::Parser;
use guesthouse_desk::availability::BookingData;
use guesthouse_desk::config::Cli;
use guesthouse_desk::controller::{Modal, Pickers, RentalsPage};
use guesthouse_desk::format::{format_date_ru, format_phone_number, format_price};
use guesthouse_desk::sources::{BackOfficeClient, BookingSource, JsonFileSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    info!("🏠 Guesthouse Desk - rental availability");

    let selected_house = cli.house.unwrap_or_default();
    let today = Local::now().date_naive();
    let mut page = RentalsPage::new(BookingData::NotLoaded, Pickers::starting(today));

    let api = BackOfficeClient::new(&settings)?;
    let source: Box<dyn BookingSource> = match &settings.bookings_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(api.clone()),
    };

    info!("Loading booked periods from {} source", source.source_name());
    match source.load_bookings().await {
        Ok(bookings) => page.on_bookings_loaded(bookings),
        Err(e) => warn!("Booked periods unavailable, all dates stay blocked: {:#}", e),
    }

    if settings.bookings_file.is_none() {
        print_rentals(&api).await;
    }

    page.open_modal(Modal::AddRental);
    match api.load_form_options().await {
        Ok(options) => info!(
            "Add-rental form has {} clients and {} houses",
            options.clients.len(),
            options.houses.len()
        ),
        Err(e) => warn!("Could not load rental form data: {:#}", e),
    }
    page.on_property_selected(&selected_house);

    let ranges = page.disabled_ranges();
    match page.selected_property() {
        Some(house) => println!("Disabled dates for house {}:", house),
        None => println!("No house selected, every date is disabled"),
    }
    for range in &ranges {
        println!("   {} – {}", format_date_ru(range.from), format_date_ru(range.to));
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&ranges)?);

    Ok(())
}

async fn print_rentals(api: &BackOfficeClient) {
    let rentals = match api.fetch_rentals().await {
        Ok(rentals) => rentals,
        Err(e) => {
            warn!("Could not load rentals: {:#}", e);
            return;
        }
    };

    println!("Rentals ({}):", rentals.len());
    for rental in &rentals {
        println!(
            "   #{} {} – {} | {} – {} | {}",
            rental.id,
            rental.client.name,
            rental.house.name,
            format_date_ru(rental.start_date),
            format_date_ru(rental.end_date),
            format_price(rental.summary_price.unwrap_or(0.0)),
        );
        if let Some(phone) = &rental.client.phone_number {
            println!("      {}", format_phone_number(phone));
        }
    }
    println!();
}
