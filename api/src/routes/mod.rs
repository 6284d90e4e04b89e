//! HTTP route handlers.

pub mod whatsapp;
