use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::experiences::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn,
    Entity as ExperienceEntity, Model as ExperienceModel,
};
use crate::experience::application::domain::entities::Experience;
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
        ExperienceRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: ExperienceModel) -> Experience {
        Experience {
            title: model.title,
            company_name: model.company_name,
            position: model.position,
            dates: model.dates,
            description: model.description,
        }
    }

    async fn rename_in(
        txn: &DatabaseTransaction,
        old_title: &str,
        experience: Experience,
    ) -> Result<(), ExperienceRepositoryError> {
        let existing = ExperienceEntity::find()
            .filter(ExperienceColumn::Title.eq(old_title))
            .one(txn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        if experience.title != existing.title {
            ExperienceEntity::delete_many()
                .filter(ExperienceColumn::Title.eq(experience.title.as_str()))
                .filter(ExperienceColumn::Id.ne(existing.id))
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        ExperienceEntity::update_many()
            .set(ExperienceActiveModel {
                title: Set(experience.title),
                company_name: Set(experience.company_name),
                position: Set(experience.position),
                dates: Set(experience.dates),
                description: Set(experience.description),
                ..Default::default()
            })
            .filter(ExperienceColumn::Id.eq(existing.id))
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let rows = ExperienceEntity::find()
            .order_by_asc(ExperienceColumn::CreatedAt)
            .order_by_asc(ExperienceColumn::Title)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(Self::to_domain).collect())
    }

    async fn upsert(&self, experience: Experience) -> Result<(), ExperienceRepositoryError> {
        let now = Utc::now();
        let row = ExperienceActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(experience.title),
            company_name: Set(experience.company_name),
            position: Set(experience.position),
            dates: Set(experience.dates),
            description: Set(experience.description),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        // An existing title keeps its id and created_at, so it keeps its place.
        ExperienceEntity::insert(row)
            .on_conflict(
                OnConflict::column(ExperienceColumn::Title)
                    .update_columns([
                        ExperienceColumn::CompanyName,
                        ExperienceColumn::Position,
                        ExperienceColumn::Dates,
                        ExperienceColumn::Description,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }

    async fn delete(&self, title: &str) -> Result<(), ExperienceRepositoryError> {
        let result = ExperienceEntity::delete_many()
            .filter(ExperienceColumn::Title.eq(title))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn rename(
        &self,
        old_title: &str,
        experience: Experience,
    ) -> Result<(), ExperienceRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::rename_in(&txn, old_title, experience).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
