//! Authentication service
//!
//! Registration, login, logout, and password reset, built on the
//! verification and session services and the user repository.

pub mod password;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use types::{AuthOutcome, LoginData, RegisterData, ResetPasswordData};
