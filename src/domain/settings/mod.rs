//! Settings API domain - request/response shapes and the operation catalogue

mod entity;
mod operation;

pub use entity::{ApiKeyState, ApiKeyStatusReport, ApiKeyValue, PowerLimitValue};
pub use operation::{HttpMethod, SettingsOperation};
