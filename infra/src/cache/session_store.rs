//! Redis-backed session store

use async_trait::async_trait;
use tracing::debug;

use mb_core::domain::entities::Session;
use mb_core::services::session::SessionStore;

use super::redis_client::RedisClient;

const SESSION_KEY_PREFIX: &str = "session";

/// Persists sessions as JSON under `session:<id>` with a server-side TTL
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn session_key(&self, session_id: &str) -> String {
        self.client
            .make_key(&format!("{}:{}", SESSION_KEY_PREFIX, session_id))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn store_session(&self, session: &Session, ttl_seconds: u64) -> Result<(), String> {
        let key = self.session_key(&session.id);
        let value = serde_json::to_string(session).map_err(|e| e.to_string())?;
        debug!(key = %key, ttl = ttl_seconds, "storing session");
        self.client
            .set_with_expiry(&key, &value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>, String> {
        let key = self.session_key(session_id);
        match self.client.get(&key).await.map_err(|e| e.to_string())? {
            Some(value) => {
                let session = serde_json::from_str(&value).map_err(|e| e.to_string())?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn delete_session(&self, session_id: &str) -> Result<bool, String> {
        let key = self.session_key(session_id);
        self.client.delete(&key).await.map_err(|e| e.to_string())
    }
}
