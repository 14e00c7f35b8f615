use std::sync::Arc;

use crate::language::application::ports::incoming::use_cases::{
    AddLanguageUseCase, DeleteLanguageUseCase, ListLanguagesUseCase, UpdateLanguageUseCase,
};

#[derive(Clone)]
pub struct LanguageUseCases {
    pub list: Arc<dyn ListLanguagesUseCase + Send + Sync>,
    pub add: Arc<dyn AddLanguageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateLanguageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLanguageUseCase + Send + Sync>,
}
