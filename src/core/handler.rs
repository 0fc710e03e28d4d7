use crate::core::preference::PreferenceService;
use crate::core::{ConfigProvider, PreferenceGateway, PreferenceRequest};
use crate::utils::error::{PreferenceError, Result};
use lambda_http::http::{header, Method, StatusCode};
use lambda_http::{Body, Request, Response};
use serde::Serialize;
use serde_json::{json, Value};

/// Serves one `createPreference` call. Never fails: every outcome is turned
/// into a terminal HTTP response carrying the permissive CORS header.
pub async fn handle<G: PreferenceGateway, C: ConfigProvider>(
    service: &PreferenceService<G, C>,
    request: Request,
) -> Response<Body> {
    if !service.has_credential() {
        tracing::error!(
            "Mercado Pago access token (MERCADOPAGO_TOKEN) is not configured in the environment"
        );
        return json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &json!({ "error": PreferenceError::MissingCredential.to_string() }),
        );
    }

    if request.method() != Method::POST {
        return text_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    }

    let outcome = match parse_body(request.body()) {
        Ok(preference) => service.create(&preference).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(e) => {
            tracing::error!(error = %e, status = e.status_code().as_u16(), "Failed to create preference");
            text_response(e.status_code(), &e.to_string())
        }
    }
}

/// An empty body reads as `{}` and a non-object JSON body as having no
/// fields, so both end up as missing parameters.
pub fn parse_body(body: &Body) -> Result<PreferenceRequest> {
    let bytes: &[u8] = body.as_ref();
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(PreferenceRequest::default());
    }

    let value: Value = serde_json::from_slice(bytes).map_err(PreferenceError::InvalidBody)?;
    if !value.is_object() {
        return Ok(PreferenceRequest::default());
    }

    Ok(serde_json::from_value(value)?)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Body> {
    match serde_json::to_string(body) {
        Ok(body) => build_response(status, "application/json", body),
        Err(e) => text_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

fn text_response(status: StatusCode, body: &str) -> Response<Body> {
    build_response(status, "text/plain; charset=utf-8", body.to_string())
}

fn build_response(status: StatusCode, content_type: &str, body: String) -> Response<Body> {
    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static("*"),
    );
    if let Ok(value) = header::HeaderValue::from_str(content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_treats_empty_body_as_no_fields() {
        let request = parse_body(&Body::Empty).unwrap();
        assert!(request.title.is_none());

        let request = parse_body(&Body::Text("  \n".to_string())).unwrap();
        assert!(request.quantity.is_none());
    }

    #[test]
    fn test_parse_body_ignores_non_object_json() {
        let request = parse_body(&Body::Text("[1, 2, 3]".to_string())).unwrap();
        assert!(request.title.is_none());
        assert!(request.unit_price.is_none());
    }

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        let err = parse_body(&Body::Text("{\"title\": ".to_string())).unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidBody(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_body_reads_fields() {
        let body = Body::Text(
            json!({"title": "Court A", "quantity": 1, "unitPrice": 1000}).to_string(),
        );
        let request = parse_body(&body).unwrap();
        assert_eq!(request.title, Some(json!("Court A")));
        assert_eq!(request.unit_price, Some(json!(1000)));
    }

    #[test]
    fn test_text_response_carries_cors_header() {
        let response = text_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
