use std::sync::Arc;

use crate::about::application::ports::incoming::use_cases::{GetAboutUseCase, UpdateAboutUseCase};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAboutUseCase + Send + Sync>,
}
