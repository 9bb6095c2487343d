//! Core services
//!
//! - `verification` - image captcha and SMS code issuance/validation
//! - `auth` - registration, login, and password reset
//! - `session` - server-side session management

pub mod auth;
pub mod session;
pub mod verification;
