use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AdminSession,
    ports::outgoing::{SessionStore, SessionStoreError},
    services::hash_token,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("No active session")]
    NoSession,

    #[error("Session lookup failed: {0}")]
    LookupFailed(String),
}

impl From<SessionStoreError> for ResolveSessionError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            // A payload we cannot read is treated as a dead session.
            SessionStoreError::CorruptSession(_) => ResolveSessionError::NoSession,
            SessionStoreError::StoreError(msg) => ResolveSessionError::LookupFailed(msg),
        }
    }
}

#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, session_token: &str) -> Result<AdminSession, ResolveSessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    sessions: S,
}

impl<S> ResolveSessionUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl<S> IResolveSessionUseCase for ResolveSessionUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    async fn execute(&self, session_token: &str) -> Result<AdminSession, ResolveSessionError> {
        if session_token.trim().is_empty() {
            return Err(ResolveSessionError::NoSession);
        }

        self.sessions
            .find(&hash_token(session_token))
            .await?
            .ok_or(ResolveSessionError::NoSession)
    }
}
