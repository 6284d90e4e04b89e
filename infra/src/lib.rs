//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Contacta
//! application. It provides the concrete WhatsApp gateway implementations
//! behind the `WhatsAppGatewayTrait` seam defined in `ct_core`:
//!
//! - **Cloud API**: production delivery through the WhatsApp Business
//!   Cloud API over HTTP
//! - **Mock**: console/log delivery for development and tests

// Re-export core types for convenience
pub use ct_core::errors::*;

/// WhatsApp gateway module - provider implementations
pub mod whatsapp;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// WhatsApp gateway error
    #[error("WhatsApp gateway error: {0}")]
    WhatsApp(String),
}
