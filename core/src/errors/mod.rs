//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::DispatchError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input passed validation but could not be resolved to either message
    /// shape. Defensive: the HTTP-level cross-field rule should make this
    /// unreachable.
    #[error("message shape unresolved: {message}")]
    MessageShape { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type DomainResult<T> = Result<T, DomainError>;
