use crate::domain::model::{BackUrls, PreferenceCreated, PreferencePayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The payment provider's preference-creation capability.
#[async_trait]
pub trait PreferenceGateway: Send + Sync {
    async fn create_preference(
        &self,
        access_token: &str,
        payload: &PreferencePayload,
    ) -> Result<PreferenceCreated>;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` when the provider credential is not configured.
    fn access_token(&self) -> Option<&str>;
    fn api_base_url(&self) -> &str;
    fn currency_id(&self) -> &str;
    fn back_urls(&self) -> &BackUrls;
}
