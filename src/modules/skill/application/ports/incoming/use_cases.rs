use async_trait::async_trait;

use crate::skill::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillCategory>, SkillError>;
}

#[async_trait]
pub trait AddSkillsUseCase: Send + Sync {
    async fn execute(&self, category: String, skills: Vec<String>) -> Result<(), SkillError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, category: String, skills: Vec<String>) -> Result<(), SkillError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, category: String) -> Result<(), SkillError>;
}
