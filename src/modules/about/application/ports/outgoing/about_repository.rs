use async_trait::async_trait;

use crate::about::application::domain::entities::AboutMe;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// `None` until the profile has been written once.
    async fn get(&self) -> Result<Option<AboutMe>, AboutRepositoryError>;

    /// Replaces the whole profile.
    async fn save(&self, about: AboutMe) -> Result<(), AboutRepositoryError>;
}
