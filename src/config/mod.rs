#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::adapters::DEFAULT_API_BASE_URL;
use crate::core::{BackUrls, ConfigProvider};
use crate::utils::validation::{
    validate_currency_code, validate_deep_link, validate_non_empty_string, validate_url, Validate,
};

pub const DEFAULT_CURRENCY_ID: &str = "ARS";

/// Settings the preference service runs with. Built once at process start.
#[derive(Clone, PartialEq)]
pub struct CheckoutConfig {
    pub access_token: Option<String>,
    pub api_base_url: String,
    pub currency_id: String,
    pub back_urls: BackUrls,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            currency_id: DEFAULT_CURRENCY_ID.to_string(),
            back_urls: BackUrls::default(),
        }
    }
}

// The token never shows up in logs.
impl std::fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("api_base_url", &self.api_base_url)
            .field("currency_id", &self.currency_id)
            .field("back_urls", &self.back_urls)
            .finish()
    }
}

impl ConfigProvider for CheckoutConfig {
    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn currency_id(&self) -> &str {
        &self.currency_id
    }

    fn back_urls(&self) -> &BackUrls {
        &self.back_urls
    }
}

impl Validate for CheckoutConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        // A missing token is reported per request, not here.
        if let Some(token) = &self.access_token {
            validate_non_empty_string("access_token", token)?;
        }

        validate_url("api_base_url", &self.api_base_url)?;
        validate_currency_code("currency_id", &self.currency_id)?;

        validate_deep_link("back_urls.success", &self.back_urls.success)?;
        validate_deep_link("back_urls.failure", &self.back_urls.failure)?;
        validate_deep_link("back_urls.pending", &self.back_urls.pending)?;

        tracing::debug!("Checkout configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CheckoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_id(), "ARS");
        assert!(config.access_token().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_currency_and_links() {
        let config = CheckoutConfig {
            currency_id: "pesos".to_string(),
            ..CheckoutConfig::default()
        };
        assert!(config.validate().is_err());

        let mut config = CheckoutConfig::default();
        config.back_urls.failure = "no scheme".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_masks_access_token() {
        let config = CheckoutConfig {
            access_token: Some("APP_USR-secret".to_string()),
            ..CheckoutConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("APP_USR-secret"));
        assert!(rendered.contains("***"));
    }
}
