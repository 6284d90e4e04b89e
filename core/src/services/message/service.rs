//! Message service: ties classification and dispatch together.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::value_objects::SendReport;
use crate::domain::MessageRequest;
use crate::errors::DispatchError;

use super::classifier::classify;
use super::phone_utils::mask_phone;
use super::traits::WhatsAppGatewayTrait;

/// Orchestrates one send attempt: classify, dispatch, normalize.
///
/// The gateway is injected at construction time so the service can be
/// exercised with fake providers and fake credentials in tests.
pub struct MessageService<W: WhatsAppGatewayTrait> {
    gateway: Arc<W>,
}

impl<W: WhatsAppGatewayTrait> MessageService<W> {
    pub fn new(gateway: Arc<W>) -> Self {
        Self { gateway }
    }

    /// Send one message and fold the outcome into a [`SendReport`].
    ///
    /// Never returns an error: every failure mode is normalized into the
    /// envelope so the HTTP layer only has to echo it.
    pub async fn send_message(&self, request: MessageRequest) -> SendReport {
        let outbound = match classify(&request) {
            Ok(outbound) => outbound,
            Err(error) => {
                tracing::warn!(
                    to = %mask_phone(&request.to),
                    error = %error,
                    "request passed validation but could not be classified"
                );
                return SendReport::rejected(400, Value::String(error.to_string()));
            }
        };

        tracing::info!(
            to = %mask_phone(outbound.to()),
            message_type = outbound.type_name(),
            provider = self.gateway.provider_name(),
            "dispatching outbound message"
        );

        match self.gateway.deliver(&outbound).await {
            Ok(body) => SendReport::ok(body),
            Err(DispatchError::Provider { status, detail }) => {
                tracing::warn!(
                    to = %mask_phone(outbound.to()),
                    status = status,
                    "provider rejected outbound message"
                );
                SendReport::provider_error(status, detail)
            }
            Err(DispatchError::Transport { reason }) => {
                tracing::error!(
                    to = %mask_phone(outbound.to()),
                    reason = %reason,
                    "transport failure reaching provider"
                );
                SendReport::transport_error(reason)
            }
        }
    }
}
