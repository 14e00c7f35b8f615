use async_trait::async_trait;

use crate::language::application::domain::entities::{Language, LanguageRef};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageRepositoryError {
    #[error("Language not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// All languages in display order.
    async fn list(&self) -> Result<Vec<Language>, LanguageRepositoryError>;

    /// Appends after the current last language.
    async fn add(&self, name: String) -> Result<Language, LanguageRepositoryError>;

    /// `target` is resolved and renamed in one transaction.
    async fn rename(&self, target: LanguageRef, name: String)
        -> Result<(), LanguageRepositoryError>;

    async fn delete(&self, target: LanguageRef) -> Result<(), LanguageRepositoryError>;
}
