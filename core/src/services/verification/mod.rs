//! Verification service
//!
//! Orchestrates the captcha generator, the code store, and the SMS gateway
//! to issue and validate short-lived verification codes.

pub mod config;
pub mod service;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationConfig;
pub use service::VerificationService;
pub use traits::{CaptchaGenerator, CodeStore, SmsGateway};
pub use types::SmsIssueResult;
