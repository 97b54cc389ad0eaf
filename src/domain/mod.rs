//! Domain layer - settings service contract and errors

pub mod error;
pub mod settings;

pub use error::DomainError;
pub use settings::{
    ApiKeyState, ApiKeyStatusReport, ApiKeyValue, HttpMethod, PowerLimitValue, SettingsOperation,
};
