use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedMarkerError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Remembers which one-shot data seeds have already run.
#[async_trait]
pub trait SeedMarkerStore: Send + Sync {
    async fn is_applied(&self, name: &str) -> Result<bool, SeedMarkerError>;

    /// Marking an already applied seed is a no-op.
    async fn mark_applied(&self, name: &str) -> Result<(), SeedMarkerError>;
}
