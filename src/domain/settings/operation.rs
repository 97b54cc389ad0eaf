//! Remote operations exposed by the settings service

use std::fmt;

/// HTTP method used by a settings operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A single request/response exchange with the settings service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsOperation {
    GetApiKey,
    SetApiKey,
    CheckApiKeyStatus,
    GetPowerLimit,
    SetPowerLimit,
    GetSettings,
    GetAppliances,
    SetAppliances,
    GetSetpoints,
    SetSetpoints,
}

impl SettingsOperation {
    pub const ALL: [SettingsOperation; 10] = [
        Self::GetApiKey,
        Self::SetApiKey,
        Self::CheckApiKeyStatus,
        Self::GetPowerLimit,
        Self::SetPowerLimit,
        Self::GetSettings,
        Self::GetAppliances,
        Self::SetAppliances,
        Self::GetSetpoints,
        Self::SetSetpoints,
    ];

    /// Path relative to the service base address
    pub fn path(&self) -> &'static str {
        match self {
            Self::GetApiKey | Self::SetApiKey => "/api/settings/api-key",
            Self::CheckApiKeyStatus => "/api/settings/api-key-status",
            Self::GetPowerLimit | Self::SetPowerLimit => "/api/settings/power-limit",
            Self::GetSettings => "/api/settings",
            Self::GetAppliances | Self::SetAppliances => "/api/settings/appliances",
            Self::GetSetpoints | Self::SetSetpoints => "/api/settings/setpoints",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Self::SetApiKey | Self::SetPowerLimit | Self::SetAppliances | Self::SetSetpoints => {
                HttpMethod::Post
            }
            _ => HttpMethod::Get,
        }
    }
}

impl fmt::Display for SettingsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::GetApiKey => "fetch API key",
            Self::SetApiKey => "set API key",
            Self::CheckApiKeyStatus => "check API key status",
            Self::GetPowerLimit => "fetch power limit",
            Self::SetPowerLimit => "set power limit",
            Self::GetSettings => "fetch settings",
            Self::GetAppliances => "fetch appliances",
            Self::SetAppliances => "set appliances",
            Self::GetSetpoints => "fetch setpoints",
            Self::SetSetpoints => "set setpoints",
        };
        f.write_str(description)
    }
}
