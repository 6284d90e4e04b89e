//! WhatsApp Gateway Module
//!
//! Provider implementations for delivering outbound WhatsApp messages.
//! All implementations share the `WhatsAppGatewayTrait` interface defined
//! in `ct_core`, so the rest of the application never depends on a
//! concrete provider.

pub mod cloud_api;
pub mod mock;
pub mod payload;

// Re-export commonly used types
pub use cloud_api::{CloudApiConfig, CloudApiGateway};
pub use mock::{MockFailure, MockWhatsAppGateway};

use ct_core::services::message::WhatsAppGatewayTrait;

#[cfg(test)]
mod tests;

/// Create a WhatsApp gateway based on configuration
///
/// Returns the gateway implementation selected by `provider`. An
/// unrecognized provider, or a Cloud API gateway whose credentials are not
/// configured, falls back to the mock implementation so the service stays
/// bootable in development.
pub fn create_whatsapp_gateway(provider: &str) -> Box<dyn WhatsAppGatewayTrait> {
    match provider {
        "mock" => Box::new(MockWhatsAppGateway::new()),
        "cloud" => match CloudApiGateway::from_env() {
            Ok(gateway) => Box::new(gateway),
            Err(e) => {
                tracing::error!("Failed to initialize WhatsApp Cloud API gateway: {}", e);
                tracing::warn!("Falling back to mock WhatsApp gateway");
                Box::new(MockWhatsAppGateway::new())
            }
        },
        other => {
            tracing::warn!(
                "Unknown WhatsApp provider '{}', using mock implementation",
                other
            );
            Box::new(MockWhatsAppGateway::new())
        }
    }
}
