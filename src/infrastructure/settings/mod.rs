//! Settings API client

mod client;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SettingsClient, SettingsClientConfig};
