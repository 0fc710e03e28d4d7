use lambda_http::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Server configuration error.")]
    MissingCredential,

    #[error("Missing required parameters.")]
    MissingParameters,

    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Invalid JSON body.")]
    InvalidBody(#[source] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{message}")]
    ProviderError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PreferenceError {
    /// HTTP status the handler answers with when this error ends a request.
    /// Only an unreadable or incomplete request is the caller's fault; a value
    /// that fails while building the payload is a 500 like a provider error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PreferenceError::MissingParameters | PreferenceError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

pub type Result<T> = std::result::Result<T, PreferenceError>;
