use std::sync::Arc;

use crate::skill::application::ports::incoming::use_cases::{
    AddSkillsUseCase, DeleteSkillUseCase, ListSkillsUseCase, UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub add: Arc<dyn AddSkillsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
}
