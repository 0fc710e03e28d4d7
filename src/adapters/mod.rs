// Adapters layer: concrete implementations for external systems.

pub mod mercadopago;

pub use mercadopago::{MercadoPagoClient, DEFAULT_API_BASE_URL};
