//! User repository trait
//!
//! User persistence is an external collaborator; the domain layer only
//! depends on this contract.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainResult;

/// Contract for storing and looking up users by phone number
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by phone number
    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>>;

    /// Whether a user with this phone number exists
    async fn exists_by_phone(&self, phone: &str) -> DomainResult<bool>;

    /// Persist a new user; fails if the phone number is already taken
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Replace the stored password hash for an existing user
    async fn update_password(&self, phone: &str, password_hash: &str) -> DomainResult<()>;
}
