//! Traits for the verification service's collaborators

use async_trait::async_trait;

/// Key-value store for short-lived verification codes
///
/// Keys carry their purpose prefix (`img:`/`sms:`); values are the bare
/// code strings. Implementations own expiry.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a code under a key with a TTL, replacing any existing entry
    async fn store_code(&self, key: &str, code: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch the code stored under a key, `None` if absent or expired
    async fn get_code(&self, key: &str) -> Result<Option<String>, String>;

    /// Delete the entry under a key; returns whether one existed
    async fn delete_code(&self, key: &str) -> Result<bool, String>;

    /// Remaining TTL of the entry in seconds, `None` if absent
    async fn get_ttl(&self, key: &str) -> Result<Option<i64>, String>;
}

/// Outbound SMS gateway
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver a templated verification SMS; returns a gateway message id
    async fn send_verification_sms(
        &self,
        phone: &str,
        code: &str,
        expires_minutes: u32,
    ) -> Result<String, String>;
}

/// Image captcha generator
pub trait CaptchaGenerator: Send + Sync {
    /// Produce a random code and the JPEG image rendering it
    fn generate(&self) -> Result<(String, Vec<u8>), String>;
}
