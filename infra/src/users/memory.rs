//! In-memory user repository
//!
//! User persistence proper sits behind the `UserRepository` trait; this
//! map-backed implementation carries the accounts for a single process
//! lifetime, which is all the service needs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use mb_core::domain::entities::User;
use mb_core::errors::{AuthError, DomainResult};
use mb_core::repositories::UserRepository;

/// Thread-safe in-memory user store keyed by phone number
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_phone(&self, phone: &str) -> DomainResult<Option<User>> {
        Ok(self.users.read().await.get(phone).cloned())
    }

    async fn exists_by_phone(&self, phone: &str) -> DomainResult<bool> {
        Ok(self.users.read().await.contains_key(phone))
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.phone) {
            return Err(AuthError::UserAlreadyExists.into());
        }
        debug!(user_id = %user.id, "created user");
        users.insert(user.phone.clone(), user.clone());
        Ok(user)
    }

    async fn update_password(&self, phone: &str, password_hash: &str) -> DomainResult<()> {
        let mut users = self.users.write().await;
        let user = users.get_mut(phone).ok_or(AuthError::UserNotFound)?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}
