use async_trait::async_trait;

use crate::project::application::domain::entities::Project;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, ProjectError>;
}

#[async_trait]
pub trait AddProjectUseCase: Send + Sync {
    async fn execute(&self, project: Project) -> Result<(), ProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, old_name: Option<String>, project: Project)
        -> Result<(), ProjectError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, name: String) -> Result<(), ProjectError>;
}
