use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body as sent by the mobile app. Fields stay loose so that a
/// falsy `0` or `""` can be told apart from a malformed value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceRequest {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default, rename = "unitPrice")]
    pub unit_price: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
    pub currency_id: String,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackUrls {
    pub success: String,
    pub failure: String,
    pub pending: String,
}

impl Default for BackUrls {
    fn default() -> Self {
        Self {
            success: "reservasapp://payment/success".to_string(),
            failure: "reservasapp://payment/failure".to_string(),
            pending: "reservasapp://payment/pending".to_string(),
        }
    }
}

/// Body of the provider's preference-creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferencePayload {
    pub items: Vec<PreferenceItem>,
    pub back_urls: BackUrls,
}

/// The subset of the provider's response this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceCreated {
    pub id: String,
    pub init_point: String,
}

/// What the mobile app receives back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceResult {
    pub init_point: String,
    pub id: String,
}

impl From<PreferenceCreated> for PreferenceResult {
    fn from(created: PreferenceCreated) -> Self {
        Self {
            init_point: created.init_point,
            id: created.id,
        }
    }
}
