use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    /// Inserts, or overwrites the project that already has this name.
    async fn upsert(&self, project: Project) -> Result<(), ProjectRepositoryError>;

    /// Deleting a name that does not exist is not an error.
    async fn delete(&self, name: &str) -> Result<(), ProjectRepositoryError>;

    /// In one transaction: the project stored under `old_name` (if any) is
    /// rewritten as `project`; otherwise `project` is upserted.
    async fn replace(
        &self,
        old_name: Option<&str>,
        project: Project,
    ) -> Result<(), ProjectRepositoryError>;
}
