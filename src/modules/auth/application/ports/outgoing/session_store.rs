use async_trait::async_trait;

use crate::auth::application::domain::entities::AdminSession;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store error: {0}")]
    StoreError(String),

    #[error("Corrupt session payload: {0}")]
    CorruptSession(String),
}

/// Server-side session storage.
///
/// Every key is the SHA-256 hex digest of the session token; raw tokens only
/// ever live in the client's cookie.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(
        &self,
        token_hash: &str,
        session: &AdminSession,
        ttl_seconds: u64,
    ) -> Result<(), SessionStoreError>;

    /// `None` when the session never existed, expired or was revoked.
    async fn find(&self, token_hash: &str) -> Result<Option<AdminSession>, SessionStoreError>;

    /// Idempotent: removing an unknown session succeeds.
    async fn remove(&self, token_hash: &str) -> Result<(), SessionStoreError>;
}
