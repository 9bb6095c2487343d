//! Session service
//!
//! Server-side sessions live in the cache under `session:<id>`; the HTTP
//! layer carries only the opaque id in a cookie.

pub mod service;
pub mod store;

pub use service::SessionService;
pub use store::SessionStore;
