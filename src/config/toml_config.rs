use crate::config::CheckoutConfig;
use crate::utils::error::{PreferenceError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g.
///
/// ```toml
/// [mercadopago]
/// access_token = "${MERCADOPAGO_TOKEN}"
///
/// [checkout]
/// currency_id = "ARS"
///
/// [checkout.back_urls]
/// success = "reservasapp://payment/success"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub mercadopago: MercadoPagoSection,
    #[serde(default)]
    pub checkout: CheckoutSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MercadoPagoSection {
    pub access_token: Option<String>,
    pub api_base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSection {
    pub currency_id: Option<String>,
    #[serde(default)]
    pub back_urls: BackUrlsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackUrlsSection {
    pub success: Option<String>,
    pub failure: Option<String>,
    pub pending: Option<String>,
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PreferenceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PreferenceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value. Unset variables
    /// become empty strings, which [`TomlConfig::apply_to`] treats as unset.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PreferenceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }

    /// Layers the file's values over `base`.
    pub fn apply_to(self, base: CheckoutConfig) -> CheckoutConfig {
        let set = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let urls = self.checkout.back_urls;

        CheckoutConfig {
            access_token: set(self.mercadopago.access_token).or(base.access_token),
            api_base_url: set(self.mercadopago.api_base_url).unwrap_or(base.api_base_url),
            currency_id: set(self.checkout.currency_id).unwrap_or(base.currency_id),
            back_urls: crate::core::BackUrls {
                success: set(urls.success).unwrap_or(base.back_urls.success),
                failure: set(urls.failure).unwrap_or(base.back_urls.failure),
                pending: set(urls.pending).unwrap_or(base.back_urls.pending),
            },
        }
    }
}
