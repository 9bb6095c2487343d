//! API response envelope and business codes
//!
//! Every JSON endpoint answers with `{ "code": <u16>, "errmsg": <string> }`.
//! Code `0` means success; the non-zero values below are the business codes
//! the site front-end dispatches on.

use serde::{Deserialize, Serialize};

/// Business result codes carried in the `code` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetCode {
    /// Operation succeeded
    Ok,
    /// Image captcha expired or did not match
    ImageCodeErr,
    /// Too many requests in the current window
    ThrottlingErr,
    /// User does not exist or already exists
    UserErr,
    /// Password format invalid or wrong password
    PwdErr,
    /// Password confirmation did not match
    CpwdErr,
    /// Phone number format invalid
    MobileErr,
    /// SMS code expired, mismatched, or delivery failed
    SmsCodeErr,
    /// A required request parameter is missing
    MissingParamErr,
    /// Session missing or expired
    SessionErr,
    /// Unexpected backend failure
    InternalErr,
}

impl RetCode {
    /// Numeric wire value of this code
    pub fn value(self) -> u16 {
        match self {
            RetCode::Ok => 0,
            RetCode::ImageCodeErr => 4001,
            RetCode::ThrottlingErr => 4002,
            RetCode::UserErr => 4004,
            RetCode::PwdErr => 4005,
            RetCode::CpwdErr => 4006,
            RetCode::MobileErr => 4007,
            RetCode::SmsCodeErr => 4008,
            RetCode::MissingParamErr => 4103,
            RetCode::SessionErr => 4301,
            RetCode::InternalErr => 5000,
        }
    }
}

impl From<RetCode> for u16 {
    fn from(code: RetCode) -> Self {
        code.value()
    }
}

/// JSON response body `{code, errmsg}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    /// Business result code, 0 = success
    pub code: u16,

    /// Human-readable message
    pub errmsg: String,
}

impl CodeResponse {
    /// Build a response from a business code and message
    pub fn new(code: RetCode, errmsg: impl Into<String>) -> Self {
        Self {
            code: code.value(),
            errmsg: errmsg.into(),
        }
    }

    /// Success response with the conventional "ok" message
    pub fn ok() -> Self {
        Self::new(RetCode::Ok, "ok")
    }

    /// Whether this response denotes success
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}
