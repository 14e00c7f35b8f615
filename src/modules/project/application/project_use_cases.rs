use std::sync::Arc;

use crate::project::application::ports::incoming::use_cases::{
    AddProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub add: Arc<dyn AddProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
