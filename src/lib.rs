//! Settings Client
//!
//! Async client for the price-driven switch settings service:
//! - API key fetch, update and validity status
//! - Power limit fetch and update
//! - Settings document, appliances and setpoints passthrough

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::DomainError;
pub use infrastructure::settings::{SettingsClient, SettingsClientConfig};
