use crate::config::CheckoutConfig;
use std::env;

pub const ACCESS_TOKEN_VAR: &str = "MERCADOPAGO_TOKEN";

impl CheckoutConfig {
    /// Reads the function's settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CheckoutConfig::from_env`] with an arbitrary variable source.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            access_token: var(ACCESS_TOKEN_VAR),
            api_base_url: var("MERCADOPAGO_API_URL").unwrap_or(defaults.api_base_url),
            currency_id: var("CHECKOUT_CURRENCY").unwrap_or(defaults.currency_id),
            back_urls: crate::core::BackUrls {
                success: var("CHECKOUT_SUCCESS_URL").unwrap_or(defaults.back_urls.success),
                failure: var("CHECKOUT_FAILURE_URL").unwrap_or(defaults.back_urls.failure),
                pending: var("CHECKOUT_PENDING_URL").unwrap_or(defaults.back_urls.pending),
            },
        }
    }
}
