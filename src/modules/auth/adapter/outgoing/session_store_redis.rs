use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AdminSession,
    ports::outgoing::{SessionStore, SessionStoreError},
};

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
/// ```text
/// portfolio:session:{token_hash} -> JSON(AdminSession)
/// ```
/// - Exists ⇒ the session is live
/// - TTL = session lifetime; Redis expiry is the only cleanup
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("portfolio:session:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::StoreError(format!("Pool error: {}", e)))
    }

    fn encode(session: &AdminSession) -> Result<String, SessionStoreError> {
        serde_json::to_string(session).map_err(|e| SessionStoreError::CorruptSession(e.to_string()))
    }

    fn decode(payload: &str) -> Result<AdminSession, SessionStoreError> {
        serde_json::from_str(payload).map_err(|e| SessionStoreError::CorruptSession(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    /// `SET portfolio:session:{hash} <json> EX <ttl>`
    async fn save(
        &self,
        token_hash: &str,
        session: &AdminSession,
        ttl_seconds: u64,
    ) -> Result<(), SessionStoreError> {
        let payload = Self::encode(session)?;
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::session_key(token_hash), payload, ttl_seconds)
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))
    }

    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let payload: Option<String> = conn
            .get(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))?;

        payload.as_deref().map(Self::decode).transpose()
    }

    /// `DEL` on a missing key is a no-op, which keeps logout idempotent.
    async fn remove(&self, token_hash: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionStoreError::StoreError(e.to_string()))
    }
}
