use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::seed_markers::{
    ActiveModel as SeedMarkerActiveModel, Column as SeedMarkerColumn, Entity as SeedMarkerEntity,
};
use crate::site::application::ports::outgoing::{SeedMarkerError, SeedMarkerStore};

#[derive(Clone)]
pub struct SeedMarkerStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SeedMarkerStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SeedMarkerError {
        SeedMarkerError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SeedMarkerStore for SeedMarkerStorePostgres {
    async fn is_applied(&self, name: &str) -> Result<bool, SeedMarkerError> {
        SeedMarkerEntity::find_by_id(name.to_string())
            .one(&*self.db)
            .await
            .map(|row| row.is_some())
            .map_err(Self::map_db_err)
    }

    async fn mark_applied(&self, name: &str) -> Result<(), SeedMarkerError> {
        let row = SeedMarkerActiveModel {
            name: Set(name.to_string()),
            applied_at: Set(Utc::now().into()),
        };

        SeedMarkerEntity::insert(row)
            .on_conflict(
                OnConflict::column(SeedMarkerColumn::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }
}
