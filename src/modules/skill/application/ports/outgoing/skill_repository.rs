use async_trait::async_trait;

use crate::skill::application::domain::entities::SkillCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Skill categories in display order. A category may hold no skills; it
/// only disappears through `delete_category`.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, SkillRepositoryError>;

    /// Appends to an existing category, or creates it after the last one.
    async fn extend_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError>;

    /// Atomically swaps the category's skills, keeping its place in the
    /// category order.
    async fn replace_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError>;

    /// Removing an unknown category succeeds.
    async fn delete_category(&self, category: &str) -> Result<(), SkillRepositoryError>;
}
