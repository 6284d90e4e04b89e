//! Request and response DTOs.

pub mod whatsapp;
