//! Session store trait

use async_trait::async_trait;

use crate::domain::entities::Session;

/// Key-value store for server-side sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a session with a TTL, replacing any entry with the same id
    async fn store_session(&self, session: &Session, ttl_seconds: u64) -> Result<(), String>;

    /// Load a session by id, `None` if absent or expired
    async fn get_session(&self, session_id: &str) -> Result<Option<Session>, String>;

    /// Delete a session; returns whether one existed
    async fn delete_session(&self, session_id: &str) -> Result<bool, String>;
}
