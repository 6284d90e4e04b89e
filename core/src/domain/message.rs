//! Outbound message model.
//!
//! `MessageRequest` is the validated, transport-agnostic form of an inbound
//! send request. `OutboundMessage` is the classified shape carried through
//! the rest of the pipeline; classification happens exactly once, in
//! [`crate::services::message::classifier`].

use serde::{Deserialize, Serialize};

/// A validated request to send one WhatsApp message.
///
/// Exactly one message shape is expected to be active: either `body` is
/// present (text message) or `template_name` plus `template_language` are
/// present (template message). When both shapes are fully populated the
/// template shape wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Destination phone number in international E.164 format.
    pub to: String,

    /// Free-form text body.
    pub body: Option<String>,

    /// Name of a pre-approved message template.
    pub template_name: Option<String>,

    /// Language/locale tag for the template, e.g. "es_MX".
    pub template_language: Option<String>,

    /// Placeholder name / substitution value pairs, in the order they
    /// appeared in the request body. The order is contractual: template
    /// parameters are emitted in exactly this order.
    pub template_values: Vec<(String, String)>,
}

impl MessageRequest {
    /// A plain text request, mostly useful in tests.
    pub fn text(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: Some(body.into()),
            template_name: None,
            template_language: None,
            template_values: Vec::new(),
        }
    }

    /// A template request, mostly useful in tests.
    pub fn template(
        to: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
        values: Vec<(String, String)>,
    ) -> Self {
        Self {
            to: to.into(),
            body: None,
            template_name: Some(name.into()),
            template_language: Some(language.into()),
            template_values: values,
        }
    }
}

/// A classified outbound message.
///
/// Determined once by the classifier and carried explicitly through the
/// pipeline instead of re-inspecting optional fields at every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// Free-form text message.
    Text { to: String, body: String },

    /// Pre-approved template message with positional parameter values.
    Template {
        to: String,
        name: String,
        language: String,
        values: Vec<(String, String)>,
    },
}

impl OutboundMessage {
    /// Destination phone number, whichever shape is active.
    pub fn to(&self) -> &str {
        match self {
            OutboundMessage::Text { to, .. } => to,
            OutboundMessage::Template { to, .. } => to,
        }
    }

    /// Provider-facing message type tag ("text" or "template").
    pub fn type_name(&self) -> &'static str {
        match self {
            OutboundMessage::Text { .. } => "text",
            OutboundMessage::Template { .. } => "template",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_message_to() {
        let text = OutboundMessage::Text {
            to: "+593995767887".to_string(),
            body: "hola".to_string(),
        };
        assert_eq!(text.to(), "+593995767887");
        assert_eq!(text.type_name(), "text");

        let template = OutboundMessage::Template {
            to: "+14155552671".to_string(),
            name: "hello_world".to_string(),
            language: "es_MX".to_string(),
            values: vec![],
        };
        assert_eq!(template.to(), "+14155552671");
        assert_eq!(template.type_name(), "template");
    }
}
