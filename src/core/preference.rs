use crate::core::{
    ConfigProvider, PreferenceGateway, PreferenceItem, PreferencePayload, PreferenceRequest,
    PreferenceResult,
};
use crate::utils::error::{PreferenceError, Result};
use crate::utils::validation::{coerce_number, coerce_text, is_truthy, validate_positive};
use serde_json::Value;

pub struct PreferenceService<G: PreferenceGateway, C: ConfigProvider> {
    gateway: G,
    config: C,
}

impl<G: PreferenceGateway, C: ConfigProvider> PreferenceService<G, C> {
    pub fn new(gateway: G, config: C) -> Self {
        Self { gateway, config }
    }

    pub fn has_credential(&self) -> bool {
        self.config.access_token().is_some()
    }

    /// Checks the required fields and coerces them into a line item priced in
    /// the configured currency.
    pub fn validate(&self, request: &PreferenceRequest) -> Result<PreferenceItem> {
        let title = required(request.title.as_ref())?;
        let quantity = required(request.quantity.as_ref())?;
        let unit_price = required(request.unit_price.as_ref())?;

        let quantity = coerce_number("quantity", quantity)?;
        validate_positive("quantity", quantity)?;
        if quantity.fract() != 0.0 || quantity > u32::MAX as f64 {
            return Err(PreferenceError::InvalidParameter {
                field: "quantity".to_string(),
                reason: format!("must be a whole number of units, got {}", quantity),
            });
        }

        let unit_price = coerce_number("unitPrice", unit_price)?;
        validate_positive("unitPrice", unit_price)?;

        let description = request
            .description
            .as_ref()
            .filter(|value| !value.is_null())
            .map(coerce_text);

        Ok(PreferenceItem {
            title: coerce_text(title),
            description,
            quantity: quantity as u32,
            currency_id: self.config.currency_id().to_string(),
            unit_price,
        })
    }

    pub fn build_payload(&self, item: PreferenceItem) -> PreferencePayload {
        PreferencePayload {
            items: vec![item],
            back_urls: self.config.back_urls().clone(),
        }
    }

    pub async fn create(&self, request: &PreferenceRequest) -> Result<PreferenceResult> {
        let access_token = self
            .config
            .access_token()
            .ok_or(PreferenceError::MissingCredential)?;

        let item = self.validate(request)?;
        let payload = self.build_payload(item);

        tracing::info!(
            payload = %serde_json::to_string(&payload)?,
            "Sending preference to Mercado Pago"
        );

        let created = self
            .gateway
            .create_preference(access_token, &payload)
            .await?;

        tracing::info!(id = %created.id, "Preference created");
        Ok(created.into())
    }
}

fn required(value: Option<&Value>) -> Result<&Value> {
    match value {
        Some(value) if is_truthy(Some(value)) => Ok(value),
        _ => Err(PreferenceError::MissingParameters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BackUrls, PreferenceCreated};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingGateway {
        calls: Arc<Mutex<Vec<(String, PreferencePayload)>>>,
    }

    #[async_trait::async_trait]
    impl PreferenceGateway for RecordingGateway {
        async fn create_preference(
            &self,
            access_token: &str,
            payload: &PreferencePayload,
        ) -> Result<PreferenceCreated> {
            self.calls
                .lock()
                .await
                .push((access_token.to_string(), payload.clone()));
            Ok(PreferenceCreated {
                id: "123".to_string(),
                init_point: "https://checkout.test/123".to_string(),
            })
        }
    }

    struct MockConfig {
        access_token: Option<String>,
        back_urls: BackUrls,
    }

    impl MockConfig {
        fn with_token(token: Option<&str>) -> Self {
            Self {
                access_token: token.map(str::to_string),
                back_urls: BackUrls::default(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn access_token(&self) -> Option<&str> {
            self.access_token.as_deref()
        }

        fn api_base_url(&self) -> &str {
            "http://localhost"
        }

        fn currency_id(&self) -> &str {
            "ARS"
        }

        fn back_urls(&self) -> &BackUrls {
            &self.back_urls
        }
    }

    fn request(body: serde_json::Value) -> PreferenceRequest {
        serde_json::from_value(body).unwrap()
    }

    fn service(
        token: Option<&str>,
    ) -> (PreferenceService<RecordingGateway, MockConfig>, RecordingGateway) {
        let gateway = RecordingGateway::default();
        (
            PreferenceService::new(gateway.clone(), MockConfig::with_token(token)),
            gateway,
        )
    }

    #[test]
    fn test_validate_coerces_numeric_strings() {
        let (service, _) = service(Some("TOKEN"));
        let item = service
            .validate(&request(json!({
                "title": "Court A",
                "description": "1h",
                "quantity": "2",
                "unitPrice": "1000.5"
            })))
            .unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, 1000.5);
        assert_eq!(item.currency_id, "ARS");
        assert_eq!(item.description.as_deref(), Some("1h"));
    }

    #[test]
    fn test_validate_rejects_missing_and_falsy_fields() {
        let (service, _) = service(Some("TOKEN"));
        for body in [
            json!({"title": "Court A"}),
            json!({"quantity": 1, "unitPrice": 1000}),
            json!({"title": "", "quantity": 1, "unitPrice": 1000}),
            json!({"title": "Court A", "quantity": 0, "unitPrice": 1000}),
            json!({"title": "Court A", "quantity": 1, "unitPrice": null}),
        ] {
            let err = service.validate(&request(body)).unwrap_err();
            assert!(matches!(err, PreferenceError::MissingParameters));
        }
    }

    #[test]
    fn test_validate_rejects_unusable_numbers() {
        let (service, _) = service(Some("TOKEN"));
        for body in [
            json!({"title": "Court A", "quantity": "many", "unitPrice": 1000}),
            json!({"title": "Court A", "quantity": 1.5, "unitPrice": 1000}),
            json!({"title": "Court A", "quantity": 1, "unitPrice": -10}),
        ] {
            let err = service.validate(&request(body)).unwrap_err();
            assert!(matches!(err, PreferenceError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_build_payload_attaches_back_urls() {
        let (service, _) = service(Some("TOKEN"));
        let item = service
            .validate(&request(json!({"title": "Court A", "quantity": 1, "unitPrice": 1000})))
            .unwrap();
        let payload = service.build_payload(item);

        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.back_urls.success, "reservasapp://payment/success");
        assert_eq!(payload.back_urls.failure, "reservasapp://payment/failure");
    }

    #[tokio::test]
    async fn test_create_passes_token_and_returns_result() {
        let (service, gateway) = service(Some("TOKEN"));
        let result = service
            .create(&request(json!({"title": "Court A", "quantity": 1, "unitPrice": 1000})))
            .await
            .unwrap();

        assert_eq!(result.id, "123");
        assert_eq!(result.init_point, "https://checkout.test/123");

        let calls = gateway.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "TOKEN");
        assert_eq!(calls[0].1.items[0].title, "Court A");
    }

    #[tokio::test]
    async fn test_create_without_token_never_calls_gateway() {
        let (service, gateway) = service(None);
        let err = service
            .create(&request(json!({"title": "Court A", "quantity": 1, "unitPrice": 1000})))
            .await
            .unwrap_err();

        assert!(matches!(err, PreferenceError::MissingCredential));
        assert!(gateway.calls.lock().await.is_empty());
    }
}
