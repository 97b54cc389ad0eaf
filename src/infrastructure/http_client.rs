use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::DomainError;

/// Failure to complete an HTTP exchange (no response was received)
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else {
            format!("Request failed: {}", e)
        };

        Self {
            message,
            timed_out: e.is_timeout(),
        }
    }
}

/// Status and body text of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("settings-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn into_response(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        Self::into_response(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        // .json() sets Content-Type: application/json
        let response = self.client.post(url).json(body).send().await?;
        Self::into_response(response).await
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    use crate::domain::settings::HttpMethod;

    /// A request observed by [`MockHttpClient`]
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: HttpMethod,
        pub url: String,
        pub body: Option<serde_json::Value>,
    }

    #[derive(Debug)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<(HttpMethod, String), HttpResponse>>,
        errors: RwLock<HashMap<(HttpMethod, String), String>>,
        requests: RwLock<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self {
                responses: RwLock::new(HashMap::new()),
                errors: RwLock::new(HashMap::new()),
                requests: RwLock::new(Vec::new()),
            }
        }

        pub fn with_response(
            self,
            method: HttpMethod,
            url: impl Into<String>,
            status: u16,
            body: impl Into<String>,
        ) -> Self {
            self.responses
                .write()
                .unwrap()
                .insert((method, url.into()), HttpResponse::new(status, body));
            self
        }

        pub fn with_json(
            self,
            method: HttpMethod,
            url: impl Into<String>,
            body: serde_json::Value,
        ) -> Self {
            self.with_response(method, url, 200, body.to_string())
        }

        pub fn with_error(
            self,
            method: HttpMethod,
            url: impl Into<String>,
            error: impl Into<String>,
        ) -> Self {
            self.errors
                .write()
                .unwrap()
                .insert((method, url.into()), error.into());
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().unwrap().clone()
        }

        fn respond(
            &self,
            method: HttpMethod,
            url: &str,
            body: Option<&serde_json::Value>,
        ) -> Result<HttpResponse, TransportError> {
            self.requests.write().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                body: body.cloned(),
            });

            let key = (method, url.to_string());

            if let Some(error) = self.errors.read().unwrap().get(&key) {
                return Err(TransportError::new(error.clone()));
            }

            self.responses
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| TransportError::new(format!("No mock response for {} {}", method, url)))
        }
    }

    impl Default for MockHttpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.respond(HttpMethod::Get, url, None)
        }

        async fn post_json(
            &self,
            url: &str,
            body: &serde_json::Value,
        ) -> Result<HttpResponse, TransportError> {
            self.respond(HttpMethod::Post, url, Some(body))
        }
    }
}
