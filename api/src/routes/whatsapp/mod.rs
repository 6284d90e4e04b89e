//! WhatsApp relay routes.

pub mod send;

pub use send::{send_whatsapp, AppState};
