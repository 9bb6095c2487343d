//! Configuration modules for the miniblog backend
//!
//! All configuration is environment-variable driven; each struct provides a
//! `from_env()` constructor with sensible development defaults.

pub mod cache;
pub mod server;
pub mod session;

pub use cache::CacheConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
