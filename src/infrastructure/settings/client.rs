use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::settings::{ApiKeyValue, HttpMethod, PowerLimitValue, SettingsOperation};
use crate::domain::DomainError;
use crate::infrastructure::http_client::{
    HttpClient, HttpClientTrait, HttpResponse, TransportError,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`SettingsClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl SettingsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SettingsClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the settings service.
///
/// Every call is a single independent exchange: no retries, no caching and no
/// state shared between calls beyond the base address.
#[derive(Debug, Clone)]
pub struct SettingsClient<C: HttpClientTrait = HttpClient> {
    base_url: String,
    client: C,
}

impl SettingsClient<HttpClient> {
    /// Create a client backed by reqwest, honouring the configured timeout
    pub fn new(config: SettingsClientConfig) -> Result<Self, DomainError> {
        let client = HttpClient::with_timeout(config.timeout)?;
        Self::with_client(config, client)
    }
}

impl<C: HttpClientTrait> SettingsClient<C> {
    pub fn with_client(config: SettingsClientConfig, client: C) -> Result<Self, DomainError> {
        let base_url = normalize_base_url(&config.base_url)?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the stored API key
    pub async fn get_api_key(&self) -> Result<String, DomainError> {
        let value: ApiKeyValue = self.get(SettingsOperation::GetApiKey).await?;
        Ok(value.api_key)
    }

    /// Store a new API key; returns the service's response unchanged
    pub async fn set_api_key(&self, api_key: &str) -> Result<Value, DomainError> {
        self.post(SettingsOperation::SetApiKey, &ApiKeyValue::new(api_key))
            .await
    }

    /// Query whether the stored API key is valid; the response is not interpreted
    pub async fn check_api_key_status(&self) -> Result<Value, DomainError> {
        self.get(SettingsOperation::CheckApiKeyStatus).await
    }

    pub async fn get_power_limit(&self) -> Result<Value, DomainError> {
        self.get(SettingsOperation::GetPowerLimit).await
    }

    pub async fn set_power_limit(&self, power_limit: f64) -> Result<Value, DomainError> {
        self.post(
            SettingsOperation::SetPowerLimit,
            &PowerLimitValue::new(power_limit),
        )
        .await
    }

    /// Fetch the whole settings document
    pub async fn get_settings(&self) -> Result<Value, DomainError> {
        self.get(SettingsOperation::GetSettings).await
    }

    pub async fn get_appliances(&self) -> Result<Value, DomainError> {
        self.get(SettingsOperation::GetAppliances).await
    }

    pub async fn set_appliances(&self, appliances: &Value) -> Result<Value, DomainError> {
        self.post(SettingsOperation::SetAppliances, appliances).await
    }

    pub async fn get_setpoints(&self) -> Result<Value, DomainError> {
        self.get(SettingsOperation::GetSetpoints).await
    }

    pub async fn set_setpoints(&self, setpoints: &Value) -> Result<Value, DomainError> {
        self.post(SettingsOperation::SetSetpoints, setpoints).await
    }

    fn url(&self, operation: SettingsOperation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn get<T: DeserializeOwned>(&self, operation: SettingsOperation) -> Result<T, DomainError> {
        self.send(operation, None).await
    }

    async fn post<B, T>(&self, operation: SettingsOperation, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| DomainError::encode(operation, e.to_string()))?;
        self.send(operation, Some(&body)).await
    }

    /// Issue the request with the method the operation is declared with
    async fn send<T: DeserializeOwned>(
        &self,
        operation: SettingsOperation,
        body: Option<&Value>,
    ) -> Result<T, DomainError> {
        let url = self.url(operation);
        let method = operation.method();
        debug!(operation = %operation, method = %method, url = %url, "Calling settings API");

        let result = match method {
            HttpMethod::Get => self.client.get(&url).await,
            HttpMethod::Post => {
                self.client
                    .post_json(&url, body.unwrap_or(&Value::Null))
                    .await
            }
        };
        Self::finish(operation, &url, result)
    }

    fn finish<T: DeserializeOwned>(
        operation: SettingsOperation,
        url: &str,
        result: Result<HttpResponse, TransportError>,
    ) -> Result<T, DomainError> {
        let response = result.map_err(|e| {
            warn!(
                operation = %operation,
                url = %url,
                timed_out = e.timed_out,
                error = %e,
                "Settings API request failed"
            );
            DomainError::transport(operation, e.to_string())
        })?;

        if !response.is_success() {
            warn!(
                operation = %operation,
                url = %url,
                status = response.status,
                "Settings API returned error status"
            );
            return Err(DomainError::status(operation, response.status, response.body));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| DomainError::decode(operation, e.to_string()))
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, DomainError> {
    let trimmed = base_url.trim().trim_end_matches('/');

    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| DomainError::configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::configuration(format!(
            "Unsupported base URL scheme '{}'",
            parsed.scheme()
        )));
    }

    Ok(trimmed.to_string())
}
