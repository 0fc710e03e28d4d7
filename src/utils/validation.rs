use crate::utils::error::{PreferenceError, Result};
use serde_json::Value;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PreferenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PreferenceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PreferenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Like [`validate_url`] but any scheme is accepted, so app deep links
/// (`myapp://payment/success`) pass.
pub fn validate_deep_link(field_name: &str, link: &str) -> Result<()> {
    Url::parse(link)
        .map(|_| ())
        .map_err(|e| PreferenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: link.to_string(),
            reason: format!("Invalid link format: {}", e),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PreferenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(PreferenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency must be a 3-letter upper-case ISO 4217 code".to_string(),
        });
    }
    Ok(())
}

/// JavaScript truthiness of a JSON value. Absent, `null`, `false`, `0`, `NaN`
/// and `""` are falsy; everything else, including `[]` and `{}`, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Coerces a JSON number, numeric string or boolean (`true` = 1, `false` = 0)
/// into a finite `f64`.
pub fn coerce_number(field_name: &str, value: &Value) -> Result<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(PreferenceError::InvalidParameter {
            field: field_name.to_string(),
            reason: format!("expected a number, got {}", value),
        }),
    }
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(PreferenceError::InvalidParameter {
            field: field_name.to_string(),
            reason: format!("must be greater than zero, got {}", value),
        });
    }
    Ok(())
}

/// Renders a truthy JSON value as text: strings as-is, anything else in its
/// JSON form.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
