use async_trait::async_trait;

use crate::experience::application::domain::entities::Experience;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceError {
    #[error("experience not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

// ──────────────────────────────────────────────────────────
// Queries
// ──────────────────────────────────────────────────────────

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError>;
}

// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(&self, experience: Experience) -> Result<(), ExperienceError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(&self, old_title: String, experience: Experience)
        -> Result<(), ExperienceError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, title: String) -> Result<(), ExperienceError>;
}
