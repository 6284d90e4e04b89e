use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use ct_core::domain::value_objects::SendReport;
use ct_core::domain::MessageRequest;

/// Request body for `POST /enviarWhatsApp`.
///
/// Field names are the external wire contract. Exactly one message shape
/// must be active: a free-form `mensaje`, or `template_name` plus
/// `template_language` (with optional `template_values`). When both are
/// fully populated the template shape takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendWhatsAppRequest {
    /// Destination phone number in international format, e.g. "+593995767887"
    #[validate(length(min = 8, max = 16, message = "must be an E.164 phone number"))]
    pub destinatario: String,

    /// Free-form message body
    pub mensaje: Option<String>,

    /// Name of a pre-approved template, e.g. "hello_world"
    pub template_name: Option<String>,

    /// Template language tag, e.g. "es_MX"
    pub template_language: Option<String>,

    /// Placeholder name → substitution value bindings. The document order
    /// of this JSON object is preserved and becomes the template parameter
    /// order.
    pub template_values: Option<Map<String, Value>>,
}

impl SendWhatsAppRequest {
    /// Convert the wire request into the domain request.
    ///
    /// Template values keep their document order; non-string values are
    /// JSON-serialized so the provider still receives text parameters.
    pub fn into_message_request(self) -> MessageRequest {
        let template_values = self
            .template_values
            .map(|values| {
                values
                    .into_iter()
                    .map(|(placeholder, value)| {
                        let text = match value {
                            Value::String(s) => s,
                            other => other.to_string(),
                        };
                        (placeholder, text)
                    })
                    .collect()
            })
            .unwrap_or_default();

        MessageRequest {
            to: self.destinatario,
            body: self.mensaje,
            template_name: self.template_name,
            template_language: self.template_language,
            template_values,
        }
    }
}

/// Response body shared by every outcome of the send endpoint:
/// `{message, data?, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendWhatsAppResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl From<SendReport> for SendWhatsAppResponse {
    fn from(report: SendReport) -> Self {
        Self {
            message: report.message,
            data: report.data,
            error: report.error,
        }
    }
}
