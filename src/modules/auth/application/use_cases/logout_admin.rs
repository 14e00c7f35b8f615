use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    ports::outgoing::{SessionStore, SessionStoreError},
    services::hash_token,
};

// ====================== Logout Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Session revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<SessionStoreError> for LogoutError {
    fn from(error: SessionStoreError) -> Self {
        LogoutError::RevocationFailed(error.to_string())
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    /// Revoke the server-side session behind `session_token`.
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    sessions: S,
}

impl<S> LogoutAdminUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl<S> ILogoutAdminUseCase for LogoutAdminUseCase<S>
where
    S: SessionStore + Send + Sync,
{
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError> {
        self.sessions.remove(&hash_token(session_token)).await?;
        info!("Admin session revoked");
        Ok(())
    }
}
