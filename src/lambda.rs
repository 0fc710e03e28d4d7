use checkout_preference::utils::{logger, validation::Validate};
use checkout_preference::{handle, CheckoutConfig, MercadoPagoClient, PreferenceService};
use lambda_http::{run, service_fn, Error, Request};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // A missing token is not fatal here: each request answers with the
    // configuration error instead.
    let config = CheckoutConfig::from_env();
    config.validate()?;
    tracing::info!(config = ?config, "Starting createPreference function");

    let gateway = MercadoPagoClient::from_config(&config);
    let service = PreferenceService::new(gateway, config);

    run(service_fn(|event: Request| {
        let service = &service;
        async move { Ok::<_, Error>(handle(service, event).await) }
    }))
    .await
}
