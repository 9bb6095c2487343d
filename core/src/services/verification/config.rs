//! Verification service configuration

use crate::domain::entities::verification_code::CODE_TTL_SECONDS;

/// Tunables for code issuance
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// TTL applied to image and SMS code entries, in seconds
    pub code_ttl_seconds: u64,

    /// Expiry stated in the SMS template, in minutes
    pub sms_expires_minutes: u32,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: CODE_TTL_SECONDS,
            sms_expires_minutes: (CODE_TTL_SECONDS / 60) as u32,
        }
    }
}
