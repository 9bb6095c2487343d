//! # Shared Module
//!
//! Cross-cutting types and utilities shared by every layer of the miniblog
//! backend: configuration structs, the API response envelope with its
//! business codes, and input validation helpers.

pub mod config;
pub mod types;
pub mod utils;
