//! Infrastructure layer - HTTP transport, settings client and logging

pub mod http_client;
pub mod logging;
pub mod settings;

pub use http_client::{HttpClient, HttpClientTrait, HttpResponse, TransportError};
