//! WhatsApp Cloud API wire payload construction.
//!
//! Pure transformation from the classified `OutboundMessage` into the JSON
//! body the Cloud API `/messages` endpoint expects. No network access
//! happens here.

use serde::Serialize;

use ct_core::domain::OutboundMessage;

/// Value of the `messaging_product` field on every Cloud API message.
pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Top-level `/messages` request body.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub messaging_product: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<&'static str>,
    pub to: String,
    #[serde(rename = "type")]
    pub message_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateContent>,
}

/// Body of a `type: "text"` message.
#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    /// Link preview expansion is off unless explicitly configured.
    pub preview_url: bool,
    pub body: String,
}

/// Body of a `type: "template"` message.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContent {
    pub name: String,
    pub language: LanguageRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageRef {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: &'static str,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub parameter_type: &'static str,
    pub text: String,
}

/// Build the Cloud API payload for a classified message.
///
/// Template parameters are emitted in the order the placeholder/value pairs
/// were supplied, which is the order they appeared in the request body.
/// Template authors can rely on that order matching their template's
/// positional parameters. A template with no values produces a payload
/// without a `components` array.
pub fn build_payload(message: &OutboundMessage) -> MessagePayload {
    match message {
        OutboundMessage::Text { to, body } => MessagePayload {
            messaging_product: MESSAGING_PRODUCT,
            recipient_type: Some("individual"),
            to: to.clone(),
            message_type: "text",
            text: Some(TextContent {
                preview_url: false,
                body: body.clone(),
            }),
            template: None,
        },
        OutboundMessage::Template {
            to,
            name,
            language,
            values,
        } => MessagePayload {
            messaging_product: MESSAGING_PRODUCT,
            recipient_type: None,
            to: to.clone(),
            message_type: "template",
            text: None,
            template: Some(TemplateContent {
                name: name.clone(),
                language: LanguageRef {
                    code: language.clone(),
                },
                components: if values.is_empty() {
                    Vec::new()
                } else {
                    vec![Component {
                        component_type: "body",
                        parameters: values
                            .iter()
                            .map(|(_, value)| Parameter {
                                parameter_type: "text",
                                text: value.clone(),
                            })
                            .collect(),
                    }]
                },
            }),
        },
    }
}
