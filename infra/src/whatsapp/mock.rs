//! Mock WhatsApp Gateway Implementation
//!
//! A mock implementation of the WhatsApp gateway for development and
//! testing. It logs messages instead of sending them, fabricates provider
//! response bodies in the Cloud API shape, and can simulate both provider
//! rejections and transport failures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use ct_core::domain::OutboundMessage;
use ct_core::errors::DispatchError;
use ct_core::services::message::{is_valid_phone_number, mask_phone, WhatsAppGatewayTrait};

/// Failure modes the mock can simulate.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Answer as if the provider rejected the message.
    Provider { status: u16, detail: Value },
    /// Answer as if the provider was unreachable.
    Transport { reason: String },
}

/// Mock WhatsApp gateway for development and testing
///
/// This implementation:
/// - Logs outbound messages instead of sending them
/// - Validates the destination number
/// - Fabricates Cloud-API-shaped response bodies with mock message ids
/// - Tracks the delivery attempt count for tests
#[derive(Clone, Default)]
pub struct MockWhatsAppGateway {
    /// Counter for tracking the number of delivery attempts
    delivery_count: Arc<AtomicU64>,
    /// Failure to simulate on every delivery, if any
    failure: Option<MockFailure>,
}

impl MockWhatsAppGateway {
    /// Create a new mock gateway that accepts every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock gateway that fails every delivery with `failure`
    pub fn failing_with(failure: MockFailure) -> Self {
        Self {
            delivery_count: Arc::new(AtomicU64::new(0)),
            failure: Some(failure),
        }
    }

    /// Number of delivery attempts made through this mock
    ///
    /// Clones share the counter, so a copy handed to an application under
    /// test still reports the total.
    pub fn delivery_count(&self) -> u64 {
        self.delivery_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WhatsAppGatewayTrait for MockWhatsAppGateway {
    async fn deliver(&self, message: &OutboundMessage) -> Result<Value, DispatchError> {
        self.delivery_count.fetch_add(1, Ordering::SeqCst);

        if !is_valid_phone_number(message.to()) {
            return Err(DispatchError::Provider {
                status: 400,
                detail: json!({
                    "message": format!("invalid recipient: {}", mask_phone(message.to())),
                }),
            });
        }

        if let Some(failure) = &self.failure {
            warn!(
                to = %mask_phone(message.to()),
                "mock gateway simulating failure"
            );
            return Err(match failure.clone() {
                MockFailure::Provider { status, detail } => {
                    DispatchError::Provider { status, detail }
                }
                MockFailure::Transport { reason } => DispatchError::Transport { reason },
            });
        }

        let message_id = format!("wamid.mock_{}", Uuid::new_v4().simple());

        info!(
            target: "whatsapp_gateway",
            provider = "mock",
            to = %mask_phone(message.to()),
            message_type = message.type_name(),
            message_id = %message_id,
            "message accepted (mock)"
        );

        Ok(json!({
            "messaging_product": "whatsapp",
            "contacts": [{
                "input": message.to(),
                "wa_id": message.to().trim_start_matches('+'),
            }],
            "messages": [{"id": message_id}],
        }))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
