//! Domain error types

pub mod domain_error;

pub use domain_error::{
    chinese_message, english_message, AuthError, DomainError, DomainResult, VerificationError,
};
