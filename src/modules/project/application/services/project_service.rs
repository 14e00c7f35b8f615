use async_trait::async_trait;
use std::sync::Arc;

use crate::project::application::domain::entities::Project;
use crate::project::application::ports::incoming::use_cases::{
    AddProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, ProjectError,
    UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::project::application::project_use_cases::ProjectUseCases;

impl From<ProjectRepositoryError> for ProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        ProjectError::RepositoryError(e.to_string())
    }
}

pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn into_use_cases(self) -> ProjectUseCases {
        let service = Arc::new(self);
        ProjectUseCases {
            list: service.clone(),
            add: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, ProjectError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> AddProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project: Project) -> Result<(), ProjectError> {
        Ok(self.repository.upsert(project).await?)
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        old_name: Option<String>,
        project: Project,
    ) -> Result<(), ProjectError> {
        Ok(self
            .repository
            .replace(old_name.as_deref(), project)
            .await?)
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for ProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, name: String) -> Result<(), ProjectError> {
        Ok(self.repository.delete(&name).await?)
    }
}
