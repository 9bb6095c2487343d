//! Verification code entity and cache key formats
//!
//! Two kinds of short-lived codes exist:
//! - image captcha text, keyed by the client-supplied uuid (`img:<uuid>`)
//! - SMS codes, keyed by the phone number (`sms:<phone>`)
//!
//! Both expire after [`CODE_TTL_SECONDS`]. Image codes are single-use: the
//! stored text is deleted on the first consumption attempt, match or not.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Length of the numeric SMS verification code
pub const SMS_CODE_LENGTH: usize = 6;

/// Lifetime of verification codes in seconds (5 minutes)
pub const CODE_TTL_SECONDS: u64 = 300;

/// Cache key for an image captcha bound to a client token
pub fn image_code_key(uuid: &str) -> String {
    format!("img:{}", uuid)
}

/// Cache key for an SMS code bound to a phone number
pub fn sms_code_key(phone: &str) -> String {
    format!("sms:{}", phone)
}

/// An issued SMS verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsCode {
    /// Phone number the code was sent to
    pub phone: String,

    /// The 6-digit numeric code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl SmsCode {
    /// Issue a new code for a phone number using the OS CSPRNG
    pub fn new(phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            phone: phone.into(),
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(CODE_TTL_SECONDS as i64),
        }
    }

    /// Generate a random 6-digit numeric code
    ///
    /// The modulo bias over a u32 range is negligible for 6 digits.
    pub fn generate_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// Whether the code has passed its expiry timestamp
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}
