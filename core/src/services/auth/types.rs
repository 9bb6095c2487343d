//! Request and result types for the auth service

use crate::domain::entities::{Session, User};

/// Registration input, already shape-checked by the HTTP layer
#[derive(Debug, Clone)]
pub struct RegisterData {
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
    pub sms_code: String,
}

/// Login input
#[derive(Debug, Clone)]
pub struct LoginData {
    pub phone: String,
    pub password: String,
    /// Keep the session cookie across browser restarts
    pub remember: bool,
}

/// Password reset input
#[derive(Debug, Clone)]
pub struct ResetPasswordData {
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
    pub sms_code: String,
}

/// A successful authentication: the user plus an established session
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub session: Session,
    /// Whether the session cookie should persist (14 days) or end with
    /// the browser session
    pub remember: bool,
}
