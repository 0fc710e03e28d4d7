use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "checkout_preference=info";
const VERBOSE_DIRECTIVE: &str = "checkout_preference=debug,info";

/// `RUST_LOG` wins over the built-in directive.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Compact human-readable lines on stderr for the CLI.
pub fn init_cli_logger(verbose: bool) {
    let directive = if verbose { VERBOSE_DIRECTIVE } else { DEFAULT_DIRECTIVE };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(layer)
        .init();
}

/// One JSON object per line, so CloudWatch can index the structured fields
/// (`payload`, `id`, `status`) the service logs.
pub fn init_lambda_logger() {
    let layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_DIRECTIVE))
        .with(layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
        assert!(EnvFilter::try_new(VERBOSE_DIRECTIVE).is_ok());
    }
}
