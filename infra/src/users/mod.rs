//! User repository implementations

pub mod memory;

pub use memory::InMemoryUserRepository;
