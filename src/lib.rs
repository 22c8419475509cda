pub mod availability;
pub mod config;
pub mod controller;
pub mod format;
pub mod models;
pub mod pickers;
pub mod sources;
