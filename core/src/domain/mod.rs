//! Domain models for outbound WhatsApp messages.

pub mod message;
pub mod value_objects;

pub use message::{MessageRequest, OutboundMessage};
pub use value_objects::SendReport;
