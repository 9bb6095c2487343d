//! # Infrastructure Layer
//!
//! Concrete implementations behind the core service traits: the Redis
//! cache (verification codes and sessions), the captcha image renderer,
//! SMS gateway clients, and the in-memory user repository.

/// Cache module, Redis client and the stores built on it
pub mod cache;

/// Captcha image generation
pub mod captcha;

/// SMS gateway clients
pub mod sms;

/// User repository implementations
pub mod users;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// Captcha rendering error
    #[error("Captcha error: {0}")]
    Captcha(String),
}
