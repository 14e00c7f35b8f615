use async_trait::async_trait;
use std::sync::Arc;

use crate::skill::application::domain::entities::SkillCategory;
use crate::skill::application::ports::incoming::use_cases::{
    AddSkillsUseCase, DeleteSkillUseCase, ListSkillsUseCase, SkillError, UpdateSkillUseCase,
};
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};
use crate::skill::application::skill_use_cases::SkillUseCases;

impl From<SkillRepositoryError> for SkillError {
    fn from(e: SkillRepositoryError) -> Self {
        match e {
            SkillRepositoryError::DatabaseError(msg) => SkillError::RepositoryError(msg),
        }
    }
}

pub struct SkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn into_use_cases(self) -> SkillUseCases {
        let service = Arc::new(self);
        SkillUseCases {
            list: service.clone(),
            add: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl<R> ListSkillsUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillCategory>, SkillError> {
        Ok(self.repository.list_categories().await?)
    }
}

#[async_trait]
impl<R> AddSkillsUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, category: String, skills: Vec<String>) -> Result<(), SkillError> {
        Ok(self.repository.extend_category(&category, skills).await?)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, category: String, skills: Vec<String>) -> Result<(), SkillError> {
        Ok(self.repository.replace_category(&category, skills).await?)
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, category: String) -> Result<(), SkillError> {
        Ok(self.repository.delete_category(&category).await?)
    }
}
