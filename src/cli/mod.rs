//! CLI module for the settings client
//!
//! Each subcommand maps to one call against the settings service and prints
//! the result to stdout.

mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::logging;
use crate::infrastructure::settings::SettingsClient;

use output::{print_json, print_text};

/// Settings Client - read and update price-driven switch settings
#[derive(Parser, Debug)]
#[command(name = "settings-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings service base URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the stored API key
    GetApiKey,

    /// Store a new API key
    SetApiKey { api_key: String },

    /// Check whether the stored API key is valid
    ApiKeyStatus,

    /// Print the current power limit
    GetPowerLimit,

    /// Set a new power limit
    SetPowerLimit {
        #[arg(allow_negative_numbers = true)]
        power_limit: f64,
    },

    /// Print the whole settings document
    Settings,

    /// Print the appliance configuration
    GetAppliances,

    /// Replace the appliance configuration with a JSON object
    SetAppliances { appliances: String },

    /// Print the setpoints
    GetSetpoints,

    /// Replace the setpoints with a JSON object
    SetSetpoints { setpoints: String },
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().map_err(DomainError::from)?;
    if let Some(base_url) = cli.base_url {
        config.settings_api.base_url = base_url;
    }

    logging::init_logging(&logging::LoggingConfig::from(&config.logging));
    info!("Using settings service at {}", config.settings_api.base_url);

    let client = SettingsClient::new(config.client_config())?;
    execute(&client, cli.command).await
}

async fn execute(client: &SettingsClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::GetApiKey => print_text(&client.get_api_key().await?),
        Command::SetApiKey { api_key } => print_json(&client.set_api_key(&api_key).await?),
        Command::ApiKeyStatus => print_json(&client.check_api_key_status().await?),
        Command::GetPowerLimit => print_json(&client.get_power_limit().await?),
        Command::SetPowerLimit { power_limit } => {
            print_json(&client.set_power_limit(power_limit).await?)
        }
        Command::Settings => print_json(&client.get_settings().await?),
        Command::GetAppliances => print_json(&client.get_appliances().await?),
        Command::SetAppliances { appliances } => {
            let appliances = parse_json_arg("appliances", &appliances)?;
            print_json(&client.set_appliances(&appliances).await?)
        }
        Command::GetSetpoints => print_json(&client.get_setpoints().await?),
        Command::SetSetpoints { setpoints } => {
            let setpoints = parse_json_arg("setpoints", &setpoints)?;
            print_json(&client.set_setpoints(&setpoints).await?)
        }
    }
}

fn parse_json_arg(name: &str, raw: &str) -> anyhow::Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("{} must be valid JSON", name))
}
