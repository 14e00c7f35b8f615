use std::sync::Arc;

use crate::experience::application::ports::incoming::use_cases::{
    AddExperienceUseCase, DeleteExperienceUseCase, ListExperiencesUseCase,
    UpdateExperienceUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    pub add: Arc<dyn AddExperienceUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
}
