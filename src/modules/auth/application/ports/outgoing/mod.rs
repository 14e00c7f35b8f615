pub mod password_hasher;
pub mod session_store;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
