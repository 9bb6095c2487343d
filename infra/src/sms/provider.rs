//! Runtime gateway selection
//!
//! The services are generic over one gateway type, so the env-driven
//! choice between Cloopen and the mock is wrapped in a delegating enum.

use async_trait::async_trait;
use tracing::{info, warn};

use mb_core::services::verification::SmsGateway;

use super::{CloopenSmsService, MockSmsService};

/// SMS gateway chosen at startup
pub enum SmsProvider {
    Cloopen(CloopenSmsService),
    Mock(MockSmsService),
}

impl SmsProvider {
    /// Pick the gateway from `SMS_PROVIDER`
    ///
    /// Anything other than `cloopen` selects the mock. A Cloopen choice
    /// with missing credentials falls back to the mock with a warning so
    /// development setups start without configuration.
    pub fn from_env() -> Self {
        match std::env::var("SMS_PROVIDER").as_deref() {
            Ok("cloopen") => match CloopenSmsService::from_env() {
                Ok(service) => {
                    info!(provider = "cloopen", "SMS gateway selected");
                    SmsProvider::Cloopen(service)
                }
                Err(e) => {
                    warn!("Cloopen gateway unavailable ({}), using mock", e);
                    SmsProvider::Mock(MockSmsService::new())
                }
            },
            _ => {
                info!(provider = "mock", "SMS gateway selected");
                SmsProvider::Mock(MockSmsService::new())
            }
        }
    }
}

#[async_trait]
impl SmsGateway for SmsProvider {
    async fn send_verification_sms(
        &self,
        phone: &str,
        code: &str,
        expires_minutes: u32,
    ) -> Result<String, String> {
        match self {
            SmsProvider::Cloopen(service) => {
                service
                    .send_verification_sms(phone, code, expires_minutes)
                    .await
            }
            SmsProvider::Mock(service) => {
                service
                    .send_verification_sms(phone, code, expires_minutes)
                    .await
            }
        }
    }
}
