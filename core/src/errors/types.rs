//! Error type definitions for message dispatch.
//!
//! Dispatch failures are carried as values through the pipeline and folded
//! into the result envelope; they are never allowed to escape as raw faults
//! past the HTTP boundary.

use serde_json::Value;
use thiserror::Error;

/// Failures raised while relaying a message to the provider.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The provider answered with an error status. `detail` carries the
    /// provider's structured error body when one was present.
    #[error("provider rejected the message (status {status})")]
    Provider { status: u16, detail: Value },

    /// The provider could not be reached at all (timeout, DNS failure,
    /// connection refused).
    #[error("transport failure: {reason}")]
    Transport { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_error_messages() {
        let provider = DispatchError::Provider {
            status: 401,
            detail: json!({"message": "invalid token"}),
        };
        assert!(provider.to_string().contains("401"));

        let transport = DispatchError::Transport {
            reason: "connection refused".to_string(),
        };
        assert!(transport.to_string().contains("connection refused"));
    }
}
