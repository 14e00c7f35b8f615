use async_trait::async_trait;
use std::sync::Arc;

use crate::experience::application::domain::entities::Experience;
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    AddExperienceUseCase, DeleteExperienceUseCase, ExperienceError, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

impl From<ExperienceRepositoryError> for ExperienceError {
    fn from(e: ExperienceRepositoryError) -> Self {
        match e {
            ExperienceRepositoryError::NotFound => ExperienceError::NotFound,
            ExperienceRepositoryError::DatabaseError(msg) => ExperienceError::RepositoryError(msg),
        }
    }
}

pub struct ExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ExperienceService<R>
where
    R: ExperienceRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn into_use_cases(self) -> ExperienceUseCases {
        let service = Arc::new(self);
        ExperienceUseCases {
            list: service.clone(),
            add: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl<R> ListExperiencesUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> AddExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, experience: Experience) -> Result<(), ExperienceError> {
        Ok(self.repository.upsert(experience).await?)
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        old_title: String,
        experience: Experience,
    ) -> Result<(), ExperienceError> {
        Ok(self.repository.rename(&old_title, experience).await?)
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for ExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, title: String) -> Result<(), ExperienceError> {
        Ok(self.repository.delete(&title).await?)
    }
}
