//! Command line and runtime settings

use clap::{Args, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rental availability for the guesthouse back office
#[derive(Debug, Clone, Parser)]
#[command(name = "guesthouse-desk")]
#[command(about = "Show which dates are open for booking a house")]
#[command(version)]
pub struct Cli {
    /// House to select in the add-rental form
    #[arg(value_name = "HOUSE")]
    pub house: Option<String>,

    #[command(flatten)]
    pub settings: Settings,
}

/// Application settings; each flag can also come from the environment
#[derive(Debug, Clone, Args, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Base URL of the back-office server
    #[arg(long = "api-url", env = "GUESTHOUSE_API_URL", default_value = "http://localhost:8080")]
    pub api_base_url: String,

    /// Page-embedded booking map; when set, used instead of the REST API
    #[arg(long, env = "GUESTHOUSE_BOOKINGS_FILE")]
    pub bookings_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", env = "GUESTHOUSE_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "GUESTHOUSE_CSRF_TOKEN", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub csrf_token: Option<String>,

    /// `tracing` filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}
