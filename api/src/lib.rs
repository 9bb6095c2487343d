//! # HTTP API Layer
//!
//! Routes, request DTOs, error-to-response mapping, and middleware for
//! the blog authentication service.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
