//! Unit tests for the Cloopen gateway client

use crate::sms::cloopen::{sign, CloopenConfig, CloopenSmsService};
use crate::InfrastructureError;

fn test_config() -> CloopenConfig {
    CloopenConfig {
        account_sid: "8aaf0708test".to_string(),
        auth_token: "token123".to_string(),
        app_id: "app456".to_string(),
        template_id: "1".to_string(),
        base_url: "https://app.cloopen.com:8883".to_string(),
        max_retries: 3,
        retry_delay_ms: 100,
        request_timeout_secs: 10,
    }
}

#[test]
fn test_signature_is_uppercase_md5() {
    let sig = sign("sid", "token", "20260101120000");
    assert_eq!(sig.len(), 32);
    assert!(sig.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    // Same inputs always produce the same signature
    assert_eq!(sig, sign("sid", "token", "20260101120000"));
    // Any input change produces a different signature
    assert_ne!(sig, sign("sid", "token", "20260101120001"));
}

#[test]
fn test_service_creation() {
    assert!(CloopenSmsService::new(test_config()).is_ok());
}

#[test]
fn test_config_from_env_requires_credentials() {
    // No CLOOPEN_* variables set in the test environment
    std::env::remove_var("CLOOPEN_ACCOUNT_SID");
    let result = CloopenConfig::from_env();
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}
