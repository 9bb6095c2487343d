//! Request DTOs

pub mod auth;
