use crate::core::{ConfigProvider, PreferenceCreated, PreferenceGateway, PreferencePayload};
use crate::utils::error::{PreferenceError, Result};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://api.mercadopago.com";

const PREFERENCES_PATH: &str = "/checkout/preferences";

/// Error document Mercado Pago returns on non-2xx answers.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MercadoPagoClient {
    client: Client,
    base_url: String,
}

impl MercadoPagoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url())
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn preferences_url(&self) -> String {
        format!("{}{}", self.base_url, PREFERENCES_PATH)
    }
}

#[async_trait::async_trait]
impl PreferenceGateway for MercadoPagoClient {
    async fn create_preference(
        &self,
        access_token: &str,
        payload: &PreferencePayload,
    ) -> Result<PreferenceCreated> {
        let url = self.preferences_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("X-Idempotency-Key", uuid::Uuid::new_v4().to_string())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    format!("Mercado Pago API responded with status {}", status.as_u16())
                });
            return Err(PreferenceError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
