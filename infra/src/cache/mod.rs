//! Redis cache client and the stores built on top of it

pub mod code_store;
pub mod redis_client;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use code_store::RedisCodeStore;
pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;
