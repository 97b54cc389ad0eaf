//! Request and response bodies of the settings service

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::settings::SettingsOperation;

/// Body of `POST /api/settings/api-key`, and the shape read back by a fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyValue {
    pub api_key: String,
}

impl ApiKeyValue {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

/// Body of `POST /api/settings/power-limit`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerLimitValue {
    pub power_limit: f64,
}

impl PowerLimitValue {
    pub fn new(power_limit: f64) -> Self {
        Self { power_limit }
    }

    /// Read a power limit out of a `GET /api/settings/power-limit` response.
    ///
    /// The service answers with a bare number; an object carrying a numeric
    /// `power_limit` field is accepted as well.
    pub fn from_response(value: &Value) -> Result<Self, DomainError> {
        let power_limit = match value {
            Value::Number(n) => n.as_f64(),
            Value::Object(map) => map.get("power_limit").and_then(Value::as_f64),
            _ => None,
        };

        power_limit.map(Self::new).ok_or_else(|| {
            DomainError::decode(
                SettingsOperation::GetPowerLimit,
                format!("no numeric power limit in {}", value),
            )
        })
    }
}

/// Validity reported by `GET /api/settings/api-key-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyState {
    Ok,
    Unauthorized,
    #[serde(other)]
    Unknown,
}

/// Typed view over the API key status object.
///
/// `SettingsClient::check_api_key_status` returns the raw JSON; callers that
/// know the service's shape can opt into this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyStatusReport {
    pub status: ApiKeyState,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiKeyStatusReport {
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        Self::deserialize(value).map_err(|e| {
            DomainError::decode(SettingsOperation::CheckApiKeyStatus, e.to_string())
        })
    }

    pub fn is_valid(&self) -> bool {
        self.status == ApiKeyState::Ok
    }
}
