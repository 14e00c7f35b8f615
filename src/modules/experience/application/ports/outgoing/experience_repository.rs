use async_trait::async_trait;

use crate::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All entries, oldest first.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    /// Inserts, or overwrites the entry that already has this title.
    async fn upsert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError>;

    async fn delete(&self, title: &str) -> Result<(), ExperienceRepositoryError>;

    /// Rewrites the entry stored under `old_title` as `experience`, in one
    /// transaction. Another entry already holding the new title is removed.
    async fn rename(
        &self,
        old_title: &str,
        experience: Experience,
    ) -> Result<(), ExperienceRepositoryError>;
}
