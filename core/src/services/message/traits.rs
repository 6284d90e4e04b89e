//! Trait seam between the message service and the provider gateway.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::OutboundMessage;
use crate::errors::DispatchError;

/// Outbound gateway to the WhatsApp provider.
///
/// Implementations build the provider wire payload for the classified
/// message and perform exactly one send attempt per call; retry policy, if
/// any, belongs to the transport layer behind the implementation.
#[async_trait]
pub trait WhatsAppGatewayTrait: Send + Sync {
    /// Deliver a classified message and return the provider response body.
    async fn deliver(&self, message: &OutboundMessage) -> Result<Value, DispatchError>;

    /// Name of the backing provider (e.g. "CloudApi", "Mock").
    fn provider_name(&self) -> &str;
}

// Lets the binary wire a provider chosen at runtime into the generic
// `MessageService` without a second code path.
#[async_trait]
impl WhatsAppGatewayTrait for Box<dyn WhatsAppGatewayTrait> {
    async fn deliver(&self, message: &OutboundMessage) -> Result<Value, DispatchError> {
        (**self).deliver(message).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
