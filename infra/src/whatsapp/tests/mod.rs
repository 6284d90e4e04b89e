//! Tests for the WhatsApp gateway implementations.

use std::sync::Mutex;

mod mock_tests;
mod payload_tests;

/// Serializes tests that mutate the provider environment variables.
pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
