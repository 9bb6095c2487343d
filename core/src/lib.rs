//! # Core Domain Layer
//!
//! Business logic for the miniblog authentication service. This crate has
//! no I/O of its own: the cache, the SMS gateway, the captcha generator,
//! and the user store are collaborators behind traits, and the services
//! here orchestrate them.
//!
//! ## Modules
//!
//! - `domain` - Entities (users, verification codes, sessions)
//! - `errors` - Domain error types
//! - `repositories` - User repository trait
//! - `services` - Verification, auth, and session services

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
