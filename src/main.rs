use checkout_preference::utils::{logger, validation::Validate};
use checkout_preference::{CliConfig, MercadoPagoClient, PreferenceService};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let config = cli.checkout_config()?;
    if cli.verbose {
        tracing::debug!("Checkout config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let gateway = MercadoPagoClient::from_config(&config);
    let service = PreferenceService::new(gateway, config);

    match service.create(&cli.preference_request()).await {
        Ok(result) => {
            tracing::info!("✅ Preference {} created", result.id);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => {
            tracing::error!(
                "❌ Preference creation failed: {} (status {})",
                e,
                e.status_code()
            );
            eprintln!("❌ {}", e);

            // Bad input exits with 2, everything else with 1.
            let exit_code = if e.is_client_error() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
