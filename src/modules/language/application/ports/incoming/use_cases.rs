use async_trait::async_trait;

use crate::language::application::domain::entities::{Language, LanguageRef};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("language not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListLanguagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Language>, LanguageError>;
}

#[async_trait]
pub trait AddLanguageUseCase: Send + Sync {
    async fn execute(&self, name: String) -> Result<Language, LanguageError>;
}

#[async_trait]
pub trait UpdateLanguageUseCase: Send + Sync {
    async fn execute(&self, target: LanguageRef, name: String) -> Result<(), LanguageError>;
}

#[async_trait]
pub trait DeleteLanguageUseCase: Send + Sync {
    async fn execute(&self, target: LanguageRef) -> Result<(), LanguageError>;
}
