use crate::config::toml_config::TomlConfig;
use crate::config::CheckoutConfig;
use crate::core::PreferenceRequest;
use crate::utils::error::Result;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// Creates a single preference from the command line, going through the same
/// validation as the HTTP function.
#[derive(Debug, Clone, Parser)]
#[command(name = "checkout-preference")]
#[command(about = "Create a Mercado Pago checkout preference")]
pub struct CliConfig {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, default_value = "1")]
    pub quantity: String,

    #[arg(long)]
    pub unit_price: String,

    #[arg(long, help = "TOML settings file layered over the environment")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the Mercado Pago API base URL")]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Environment first, then the settings file, then command-line flags.
    pub fn checkout_config(&self) -> Result<CheckoutConfig> {
        let mut config = CheckoutConfig::from_env();

        if let Some(path) = &self.config {
            config = TomlConfig::from_file(path)?.apply_to(config);
        }

        if let Some(url) = &self.api_base_url {
            config.api_base_url = url.clone();
        }

        Ok(config)
    }

    pub fn preference_request(&self) -> PreferenceRequest {
        PreferenceRequest {
            title: Some(Value::String(self.title.clone())),
            description: self.description.clone().map(Value::String),
            quantity: Some(Value::String(self.quantity.clone())),
            unit_price: Some(Value::String(self.unit_price.clone())),
        }
    }
}
