//! Redis-backed verification-code store

use async_trait::async_trait;
use tracing::debug;

use mb_core::services::verification::CodeStore;

use super::redis_client::RedisClient;

/// Stores verification codes as plain strings under their `img:`/`sms:` keys
///
/// Key namespacing beyond those prefixes comes from the client's configured
/// key prefix, so several deployments can share one Redis instance.
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn store_code(&self, key: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        let full_key = self.client.make_key(key);
        debug!(key = %full_key, ttl = ttl_seconds, "storing verification code");
        self.client
            .set_with_expiry(&full_key, code, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_code(&self, key: &str) -> Result<Option<String>, String> {
        let full_key = self.client.make_key(key);
        self.client.get(&full_key).await.map_err(|e| e.to_string())
    }

    async fn delete_code(&self, key: &str) -> Result<bool, String> {
        let full_key = self.client.make_key(key);
        self.client.delete(&full_key).await.map_err(|e| e.to_string())
    }

    async fn get_ttl(&self, key: &str) -> Result<Option<i64>, String> {
        let full_key = self.client.make_key(key);
        self.client.ttl(&full_key).await.map_err(|e| e.to_string())
    }
}
