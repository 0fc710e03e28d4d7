pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::MercadoPagoClient;
pub use config::CheckoutConfig;
pub use self::core::{handler::handle, preference::PreferenceService};
pub use utils::error::{PreferenceError, Result};
