//! Domain services.

pub mod message;

pub use message::{MessageService, WhatsAppGatewayTrait};
