use thiserror::Error;

use crate::domain::settings::SettingsOperation;

/// Errors raised by settings API calls
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to {operation}: HTTP {status}")]
    Status {
        operation: SettingsOperation,
        status: u16,
        body: String,
    },

    #[error("Failed to {operation}: {message}")]
    Transport {
        operation: SettingsOperation,
        message: String,
    },

    #[error("Failed to {operation}: invalid request body: {message}")]
    Encode {
        operation: SettingsOperation,
        message: String,
    },

    #[error("Failed to {operation}: invalid response body: {message}")]
    Decode {
        operation: SettingsOperation,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn status(operation: SettingsOperation, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            operation,
            status,
            body: body.into(),
        }
    }

    pub fn transport(operation: SettingsOperation, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    pub fn encode(operation: SettingsOperation, message: impl Into<String>) -> Self {
        Self::Encode {
            operation,
            message: message.into(),
        }
    }

    pub fn decode(operation: SettingsOperation, message: impl Into<String>) -> Self {
        Self::Decode {
            operation,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The operation that failed, if the error came from a remote call
    pub fn operation(&self) -> Option<SettingsOperation> {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            Self::Configuration { .. } => None,
        }
    }

    /// HTTP status code of a non-success response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response text returned alongside a non-success status
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
