//! Input validation helpers
//!
//! Field formats enforced at registration and login:
//! - phone: mainland mobile number, `1` followed by `3-9` and nine digits
//! - password: 8 to 20 alphanumeric characters

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

static PASSWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z]{8,20}$").unwrap());

/// Check that a phone number matches the mobile number format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Check that a password is 8-20 alphanumeric characters
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_RE.is_match(password)
}

/// Mask a phone number for logging, keeping only the last four digits
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        "****".to_string()
    } else {
        format!("***{}", &phone[phone.len() - 4..])
    }
}
