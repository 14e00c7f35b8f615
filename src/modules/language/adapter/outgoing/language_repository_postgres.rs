use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::languages::{
    ActiveModel as LanguageActiveModel, Column as LanguageColumn, Entity as LanguageEntity,
    Model as LanguageModel,
};
use crate::language::application::domain::entities::{Language, LanguageRef};
use crate::language::application::ports::outgoing::{LanguageRepository, LanguageRepositoryError};

#[derive(Clone)]
pub struct LanguageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LanguageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> LanguageRepositoryError {
        LanguageRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: LanguageModel) -> Language {
        Language {
            id: model.id,
            name: model.name,
        }
    }

    /// Finds the row a form addressed. Index lookups use the same ordering
    /// as `list`, so the index matches what the admin page rendered.
    async fn resolve<C>(
        conn: &C,
        target: LanguageRef,
    ) -> Result<LanguageModel, LanguageRepositoryError>
    where
        C: ConnectionTrait,
    {
        let found = match target {
            LanguageRef::Id(id) => LanguageEntity::find_by_id(id).one(conn).await,
            LanguageRef::Index(index) => {
                LanguageEntity::find()
                    .order_by_asc(LanguageColumn::Position)
                    .order_by_asc(LanguageColumn::CreatedAt)
                    .offset(index as u64)
                    .limit(1)
                    .one(conn)
                    .await
            }
        };

        found
            .map_err(Self::map_db_err)?
            .ok_or(LanguageRepositoryError::NotFound)
    }

    /// Reads the last position and inserts after it on the same transaction.
    async fn add_in(txn: &DatabaseTransaction, name: String) -> Result<Language, DbErr> {
        let last = LanguageEntity::find()
            .order_by_desc(LanguageColumn::Position)
            .one(txn)
            .await?;
        let position = last.map(|l| l.position + 1).unwrap_or(0);

        let id = Uuid::new_v4();
        let row = LanguageActiveModel {
            id: Set(id),
            name: Set(name.clone()),
            position: Set(position),
            created_at: Set(Utc::now().into()),
        };

        LanguageEntity::insert(row).exec_without_returning(txn).await?;

        Ok(Language { id, name })
    }
}

#[async_trait]
impl LanguageRepository for LanguageRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Language>, LanguageRepositoryError> {
        let rows = LanguageEntity::find()
            .order_by_asc(LanguageColumn::Position)
            .order_by_asc(LanguageColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(Self::to_domain).collect())
    }

    async fn add(&self, name: String) -> Result<Language, LanguageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let added = match Self::add_in(&txn, name).await {
            Ok(language) => language,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;
        Ok(added)
    }

    async fn rename(
        &self,
        target: LanguageRef,
        name: String,
    ) -> Result<(), LanguageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = match Self::resolve(&txn, target).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        if let Err(e) = LanguageEntity::update_many()
            .set(LanguageActiveModel {
                name: Set(name),
                ..Default::default()
            })
            .filter(LanguageColumn::Id.eq(existing.id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn delete(&self, target: LanguageRef) -> Result<(), LanguageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = match Self::resolve(&txn, target).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        if let Err(e) = LanguageEntity::delete_by_id(existing.id).exec(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
