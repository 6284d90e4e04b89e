//! WhatsApp Cloud API Gateway Implementation
//!
//! This module provides message delivery through the WhatsApp Business
//! Cloud API (Graph API). It implements the `WhatsAppGatewayTrait` for
//! production delivery.
//!
//! ## Features
//!
//! - Text and template message payloads
//! - Bearer-token authentication against the Graph API
//! - Provider error bodies passed through as structured detail
//! - Security: phone number masking in logs; the access token never
//!   appears in logs or error detail

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use ct_core::domain::OutboundMessage;
use ct_core::errors::DispatchError;
use ct_core::services::message::{mask_phone, WhatsAppGatewayTrait};

use crate::InfrastructureError;

use super::payload::build_payload;

/// Cloud API gateway configuration
#[derive(Debug, Clone)]
pub struct CloudApiConfig {
    /// Opaque bearer credential for the Graph API
    pub access_token: String,
    /// Provider-assigned identifier of the sending phone number
    pub phone_number_id: String,
    /// Base URL of the Graph API
    pub api_base_url: String,
    /// Graph API version segment (e.g. "v17.0")
    pub api_version: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl CloudApiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let access_token = std::env::var("WHATSAPP_ACCESS_TOKEN").map_err(|_| {
            InfrastructureError::Config("WHATSAPP_ACCESS_TOKEN not set".to_string())
        })?;
        let phone_number_id = std::env::var("WHATSAPP_PHONE_NUMBER_ID").map_err(|_| {
            InfrastructureError::Config("WHATSAPP_PHONE_NUMBER_ID not set".to_string())
        })?;

        Ok(Self {
            access_token,
            phone_number_id,
            api_base_url: std::env::var("WHATSAPP_API_BASE_URL")
                .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
            api_version: std::env::var("WHATSAPP_API_VERSION")
                .unwrap_or_else(|_| "v17.0".to_string()),
            request_timeout_secs: std::env::var("WHATSAPP_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Full URL of the message-send endpoint for the configured sender.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/{}/{}/messages",
            self.api_base_url.trim_end_matches('/'),
            self.api_version,
            self.phone_number_id
        )
    }
}

/// WhatsApp Cloud API gateway
pub struct CloudApiGateway {
    client: Client,
    config: CloudApiConfig,
}

impl CloudApiGateway {
    /// Create a new Cloud API gateway
    pub fn new(config: CloudApiConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            "WhatsApp Cloud API gateway initialized for sender id: {}",
            config.phone_number_id
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = CloudApiConfig::from_env()?;
        Self::new(config)
    }
}

/// Map a provider HTTP response into the dispatch result.
///
/// Graph API error bodies carry an `error` object; when present it is
/// passed through as the failure detail, otherwise the raw body is kept so
/// the caller still sees what the provider said.
pub(crate) fn map_provider_response(status: u16, body: Value) -> Result<Value, DispatchError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }

    let detail = match &body {
        Value::Object(map) => map.get("error").cloned().unwrap_or(body.clone()),
        _ => body.clone(),
    };
    Err(DispatchError::Provider { status, detail })
}

#[async_trait]
impl WhatsAppGatewayTrait for CloudApiGateway {
    async fn deliver(&self, message: &OutboundMessage) -> Result<Value, DispatchError> {
        let payload = build_payload(message);

        debug!(
            to = %mask_phone(message.to()),
            message_type = message.type_name(),
            "posting message payload to Cloud API"
        );

        // Exactly one outbound call per invocation; no retry at this layer.
        let response = self
            .client
            .post(self.config.messages_url())
            .bearer_auth(&self.config.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("transport failure reaching Cloud API: {}", e);
                DispatchError::Transport {
                    reason: format!("could not reach WhatsApp Cloud API: {}", e),
                }
            })?;

        let status = response.status().as_u16();
        // Non-JSON bodies (gateway HTML error pages and the like) become a
        // null detail; the provider status is still echoed.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        match map_provider_response(status, body) {
            Ok(body) => {
                info!(
                    to = %mask_phone(message.to()),
                    status = status,
                    "Cloud API accepted outbound message"
                );
                Ok(body)
            }
            Err(e) => {
                warn!(
                    to = %mask_phone(message.to()),
                    status = status,
                    "Cloud API rejected outbound message"
                );
                Err(e)
            }
        }
    }

    fn provider_name(&self) -> &str {
        "CloudApi"
    }
}
