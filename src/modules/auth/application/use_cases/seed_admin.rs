use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ISeedAdminUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str)
        -> Result<SeedOutcome, SeedAdminError>;
}

/// Ensures the administrator account exists. An existing row keeps its
/// password; the configured one only applies on first start.
pub struct SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ISeedAdminUseCase for SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SeedOutcome, SeedAdminError> {
        let existing = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| SeedAdminError::DatabaseError(e.to_string()))?;

        if existing.is_some() {
            return Ok(SeedOutcome::AlreadyPresent);
        }

        let password_hash = self
            .password_hasher
            .hash_password(password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        match self
            .repository
            .create_user(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await
        {
            Ok(id) => {
                info!("Seeded admin account {} ({})", username, id.value());
                Ok(SeedOutcome::Created)
            }
            // Another instance won the race.
            Err(UserRepositoryError::UsernameTaken) => Ok(SeedOutcome::AlreadyPresent),
            Err(UserRepositoryError::DatabaseError(msg)) => {
                Err(SeedAdminError::DatabaseError(msg))
            }
        }
    }
}
