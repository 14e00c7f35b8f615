use async_trait::async_trait;
use std::sync::Arc;

use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::domain::entities::AboutMe;
use crate::about::application::ports::incoming::use_cases::{
    AboutError, GetAboutUseCase, UpdateAboutUseCase,
};
use crate::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};

impl From<AboutRepositoryError> for AboutError {
    fn from(e: AboutRepositoryError) -> Self {
        AboutError::RepositoryError(e.to_string())
    }
}

pub struct AboutService<R>
where
    R: AboutRepository,
{
    repository: R,
}

impl<R> AboutService<R>
where
    R: AboutRepository + 'static,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn into_use_cases(self) -> AboutUseCases {
        let service = Arc::new(self);
        AboutUseCases {
            get: service.clone(),
            update: service,
        }
    }
}

#[async_trait]
impl<R> GetAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<AboutMe>, AboutError> {
        Ok(self.repository.get().await?)
    }
}

#[async_trait]
impl<R> UpdateAboutUseCase for AboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, about: AboutMe) -> Result<(), AboutError> {
        Ok(self.repository.save(about).await?)
    }
}
