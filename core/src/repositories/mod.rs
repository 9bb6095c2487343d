//! Repository traits for external persistence collaborators

pub mod user;

pub use user::UserRepository;
