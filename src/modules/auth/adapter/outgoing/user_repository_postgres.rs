use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<UserId, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UsernameTaken;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(UserId::from(inserted.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn new_admin() -> NewUser {
        NewUser {
            username: "admin".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![UserModel {
                id,
                username: "admin".to_string(),
                password_hash: "$argon2id$hash".to_string(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let created = repo.create_user(new_admin()).await.unwrap();

        assert_eq!(created.value(), id);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"users_username_key\"".into(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(new_admin()).await;

        assert!(matches!(result, Err(UserRepositoryError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection refused".into())])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(new_admin()).await;

        assert!(matches!(result, Err(UserRepositoryError::DatabaseError(_))));
    }
}
