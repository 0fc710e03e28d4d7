pub mod handler;
pub mod preference;

pub use crate::domain::model::{
    BackUrls, PreferenceCreated, PreferenceItem, PreferencePayload, PreferenceRequest,
    PreferenceResult,
};
pub use crate::domain::ports::{ConfigProvider, PreferenceGateway};
pub use crate::utils::error::Result;
