use crate::models::BookingMap;
use crate::sources::traits::BookingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Booking map read from a JSON file shaped like the page-embedded data
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BookingSource for JsonFileSource {
    async fn load_bookings(&self) -> Result<BookingMap> {
        debug!("Reading booked periods from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed booking map in {}", self.path.display()))
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
