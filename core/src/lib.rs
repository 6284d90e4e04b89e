//! # Contacta Core
//!
//! Core business logic and domain layer for the Contacta backend.
//! This crate contains the outbound message model, the classification and
//! dispatch services, the gateway trait seam, and the error types that form
//! the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{MessageRequest, OutboundMessage, SendReport};
pub use errors::{DispatchError, DomainError, DomainResult};
pub use services::{MessageService, WhatsAppGatewayTrait};
