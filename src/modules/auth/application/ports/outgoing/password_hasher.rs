use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Background task failed")]
    TaskFailed,
}

/// One-way salted password hashing.
///
/// `verify_password` must compare in constant time; a wrong password is
/// `Ok(false)`, not an error.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
