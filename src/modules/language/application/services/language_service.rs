use async_trait::async_trait;
use std::sync::Arc;

use crate::language::application::domain::entities::{Language, LanguageRef};
use crate::language::application::language_use_cases::LanguageUseCases;
use crate::language::application::ports::incoming::use_cases::{
    AddLanguageUseCase, DeleteLanguageUseCase, LanguageError, ListLanguagesUseCase,
    UpdateLanguageUseCase,
};
use crate::language::application::ports::outgoing::{LanguageRepository, LanguageRepositoryError};

impl From<LanguageRepositoryError> for LanguageError {
    fn from(e: LanguageRepositoryError) -> Self {
        match e {
            LanguageRepositoryError::NotFound => LanguageError::NotFound,
            LanguageRepositoryError::DatabaseError(msg) => LanguageError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LanguageService<R>
where
    R: LanguageRepository,
{
    repository: R,
}

impl<R> LanguageService<R>
where
    R: LanguageRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// One shared service behind every language use case.
    pub fn into_use_cases(self) -> LanguageUseCases {
        let service = Arc::new(self);
        LanguageUseCases {
            list: service.clone(),
            add: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}

#[async_trait]
impl<R> ListLanguagesUseCase for LanguageService<R>
where
    R: LanguageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Language>, LanguageError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> AddLanguageUseCase for LanguageService<R>
where
    R: LanguageRepository + Send + Sync,
{
    async fn execute(&self, name: String) -> Result<Language, LanguageError> {
        Ok(self.repository.add(name).await?)
    }
}

#[async_trait]
impl<R> UpdateLanguageUseCase for LanguageService<R>
where
    R: LanguageRepository + Send + Sync,
{
    async fn execute(&self, target: LanguageRef, name: String) -> Result<(), LanguageError> {
        Ok(self.repository.rename(target, name).await?)
    }
}

#[async_trait]
impl<R> DeleteLanguageUseCase for LanguageService<R>
where
    R: LanguageRepository + Send + Sync,
{
    async fn execute(&self, target: LanguageRef) -> Result<(), LanguageError> {
        Ok(self.repository.delete(target).await?)
    }
}
