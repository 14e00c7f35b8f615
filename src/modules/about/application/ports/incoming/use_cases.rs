use async_trait::async_trait;

use crate::about::application::domain::entities::AboutMe;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AboutError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<AboutMe>, AboutError>;
}

#[async_trait]
pub trait UpdateAboutUseCase: Send + Sync {
    async fn execute(&self, about: AboutMe) -> Result<(), AboutError>;
}
