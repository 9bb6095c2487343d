//! Console-logging mock SMS gateway
//!
//! Logs the verification code instead of sending it. Used in development
//! (no gateway credentials needed) and in tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use mb_core::services::verification::SmsGateway;
use mb_shared::utils::validation::mask_phone;

/// Mock SMS gateway for development and testing
#[derive(Clone)]
pub struct MockSmsService {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockSmsService {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Mock that fails every send, for error-path tests
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsGateway for MockSmsService {
    async fn send_verification_sms(
        &self,
        phone: &str,
        code: &str,
        expires_minutes: u32,
    ) -> Result<String, String> {
        if self.simulate_failure {
            warn!(phone = %mask_phone(phone), "mock SMS gateway simulating failure");
            return Err("simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            provider = "mock",
            phone = %mask_phone(phone),
            message_id = %message_id,
            code = %code,
            expires_minutes,
            messages_sent = count,
            "mock SMS delivered"
        );

        Ok(message_id)
    }
}
