//! Form and query DTOs for the auth endpoints
//!
//! All fields default to empty strings so a missing parameter reaches the
//! handler, which answers the business code for it instead of a framework
//! 400. Format checks run again inside the services; the validator pass
//! here lets handlers reject bad fields before touching any state.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use mb_shared::utils::validation::{is_valid_password, is_valid_phone};

fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if is_valid_phone(mobile) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile_format"))
    }
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        Ok(())
    } else {
        Err(ValidationError::new("password_format"))
    }
}

/// POST /register/ form body
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(custom = "validate_mobile")]
    pub mobile: String,

    #[serde(default)]
    #[validate(custom = "validate_password")]
    pub password: String,

    #[serde(default)]
    pub password2: String,

    #[serde(default)]
    pub sms_code: String,
}

impl RegisterForm {
    pub fn has_all_fields(&self) -> bool {
        !self.mobile.is_empty()
            && !self.password.is_empty()
            && !self.password2.is_empty()
            && !self.sms_code.is_empty()
    }
}

/// POST /login/ form body
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom = "validate_mobile")]
    pub mobile: String,

    #[serde(default)]
    #[validate(custom = "validate_password")]
    pub password: String,

    /// Checkbox value; "on", "true" or "1" when ticked
    #[serde(default)]
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn has_all_fields(&self) -> bool {
        !self.mobile.is_empty() && !self.password.is_empty()
    }

    pub fn is_remember(&self) -> bool {
        matches!(
            self.remember.as_deref(),
            Some("on") | Some("true") | Some("1")
        )
    }
}

/// GET /imagecode/ query string
#[derive(Debug, Deserialize)]
pub struct ImageCodeQuery {
    #[serde(default)]
    pub uuid: String,
}

/// GET /smscode/ query string
#[derive(Debug, Deserialize)]
pub struct SmsCodeQuery {
    #[serde(default)]
    pub image_code: String,

    #[serde(default)]
    pub uuid: String,

    #[serde(default)]
    pub mobile: String,
}

impl SmsCodeQuery {
    pub fn has_all_fields(&self) -> bool {
        !self.image_code.is_empty() && !self.uuid.is_empty() && !self.mobile.is_empty()
    }
}
