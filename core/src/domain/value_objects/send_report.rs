//! Normalized result envelope for one send attempt.

use serde_json::Value;

/// The normalized outcome of one send attempt.
///
/// Always one of two complete shapes: a success triple (`status == 200`,
/// `message == "OK"`, `data` set) or a failure triple (`status` in the
/// 4xx/5xx range, `message == "ERROR"`, `error` set). The envelope is never
/// partially filled, so the HTTP layer only has to echo it.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReport {
    /// HTTP status code to surface to the caller.
    pub status: u16,
    /// "OK" on success, "ERROR" on any failure.
    pub message: String,
    /// Provider response body on success.
    pub data: Option<Value>,
    /// Error detail on failure.
    pub error: Option<Value>,
}

impl SendReport {
    /// Successful delivery; `data` is the provider response body.
    pub fn ok(data: Value) -> Self {
        Self {
            status: 200,
            message: "OK".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// The provider rejected the message.
    ///
    /// The provider status is echoed when it is a usable error code;
    /// anything outside the 4xx/5xx range degrades to 500.
    pub fn provider_error(status: u16, detail: Value) -> Self {
        let status = if (400..=599).contains(&status) { status } else { 500 };
        Self {
            status,
            message: "ERROR".to_string(),
            data: None,
            error: Some(detail),
        }
    }

    /// The provider could not be reached at all.
    pub fn transport_error(reason: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: "ERROR".to_string(),
            data: None,
            error: Some(Value::String(reason.into())),
        }
    }

    /// Request rejected before any provider call was made.
    pub fn rejected(status: u16, error: Value) -> Self {
        Self {
            status,
            message: "ERROR".to_string(),
            data: None,
            error: Some(error),
        }
    }

    /// Whether the report carries the success shape.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
