use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::AdminSession,
    ports::outgoing::{PasswordHasher, SessionStore, UserQuery},
    services::{generate_session_token, hash_token},
};

// ========================= Login Command =========================
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

impl LoginCommand {
    /// Credentials are compared as submitted: no trimming, no case folding.
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Session error: {0}")]
    SessionError(String),
}

// ============================ Login Outcome =================================
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Raw token for the cookie. Only its hash is stored.
    pub session_token: String,
    pub session: AdminSession,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase<Q, S>
where
    Q: UserQuery + Send + Sync,
    S: SessionStore + Send + Sync,
{
    query: Q,
    sessions: S,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    session_ttl_seconds: u64,
}

impl<Q, S> LoginAdminUseCase<Q, S>
where
    Q: UserQuery + Send + Sync,
    S: SessionStore + Send + Sync,
{
    pub fn new(
        query: Q,
        sessions: S,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            query,
            sessions,
            password_hasher,
            session_ttl_seconds,
        }
    }
}

#[async_trait]
impl<Q, S> ILoginAdminUseCase for LoginAdminUseCase<Q, S>
where
    Q: UserQuery + Send + Sync,
    S: SessionStore + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError> {
        // 1️⃣ Find the account
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        // 2️⃣ Verify password against the stored hash
        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3️⃣ Issue a session
        let session = AdminSession {
            user_id: user.id,
            username: user.username,
        };
        let session_token = generate_session_token();

        self.sessions
            .save(&hash_token(&session_token), &session, self.session_ttl_seconds)
            .await
            .map_err(|e| LoginError::SessionError(e.to_string()))?;

        Ok(LoginOutcome {
            session_token,
            session,
        })
    }
}
