//! Session lifecycle management

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mb_shared::config::SessionConfig;

use crate::domain::entities::Session;
use crate::errors::{DomainError, DomainResult};

use super::store::SessionStore;

/// Creates, resolves, and destroys server-side sessions
pub struct SessionService<T: SessionStore> {
    store: Arc<T>,
    config: SessionConfig,
}

impl<T: SessionStore> SessionService<T> {
    pub fn new(store: Arc<T>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Server-side session lifetime in seconds
    pub fn max_age_seconds(&self) -> u64 {
        self.config.max_age_seconds
    }

    /// Name of the cookie that carries the session id
    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// Whether the session cookie should be marked Secure
    pub fn secure_cookies(&self) -> bool {
        self.config.secure
    }

    /// Establish a session for an authenticated user
    pub async fn create(&self, user_id: Uuid, phone: &str) -> DomainResult<Session> {
        let session = Session::new(user_id, phone);
        self.store
            .store_session(&session, self.config.max_age_seconds)
            .await
            .map_err(DomainError::internal)?;

        info!(user_id = %user_id, event = "session_created", "session established");
        Ok(session)
    }

    /// Resolve a session id to its session, if still live
    pub async fn get(&self, session_id: &str) -> DomainResult<Option<Session>> {
        self.store
            .get_session(session_id)
            .await
            .map_err(DomainError::internal)
    }

    /// Destroy a session; destroying an unknown id is not an error
    pub async fn destroy(&self, session_id: &str) -> DomainResult<()> {
        self.store
            .delete_session(session_id)
            .await
            .map_err(DomainError::internal)?;

        info!(event = "session_destroyed", "session destroyed");
        Ok(())
    }
}
