use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as ProjectModel,
};
use crate::project::application::domain::entities::Project;
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ProjectRepositoryError {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }

    async fn upsert_on<C>(conn: &C, project: Project) -> Result<(), ProjectRepositoryError>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let row = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(project.name),
            description: Set(project.description),
            technologies: Set(to_json(&project.technologies)?),
            link: Set(project.link),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        ProjectEntity::insert(row)
            .on_conflict(
                OnConflict::column(ProjectColumn::Name)
                    .update_columns([
                        ProjectColumn::Description,
                        ProjectColumn::Technologies,
                        ProjectColumn::Link,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }

    async fn replace_in(
        txn: &DatabaseTransaction,
        old_name: Option<&str>,
        project: Project,
    ) -> Result<(), ProjectRepositoryError> {
        let existing = match old_name {
            Some(old_name) => ProjectEntity::find()
                .filter(ProjectColumn::Name.eq(old_name))
                .one(txn)
                .await
                .map_err(Self::map_db_err)?,
            None => None,
        };

        let Some(existing) = existing else {
            return Self::upsert_on(txn, project).await;
        };

        if project.name != existing.name {
            ProjectEntity::delete_many()
                .filter(ProjectColumn::Name.eq(project.name.as_str()))
                .filter(ProjectColumn::Id.ne(existing.id))
                .exec(txn)
                .await
                .map_err(Self::map_db_err)?;
        }

        ProjectEntity::update_many()
            .set(ProjectActiveModel {
                name: Set(project.name),
                description: Set(project.description),
                technologies: Set(to_json(&project.technologies)?),
                link: Set(project.link),
                ..Default::default()
            })
            .filter(ProjectColumn::Id.eq(existing.id))
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}

fn to_domain(model: ProjectModel) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        name: model.name,
        description: model.description,
        technologies: from_json(&model.technologies)?,
        link: model.link,
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let rows = ProjectEntity::find()
            .order_by_asc(ProjectColumn::CreatedAt)
            .order_by_asc(ProjectColumn::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        rows.into_iter().map(to_domain).collect()
    }

    async fn upsert(&self, project: Project) -> Result<(), ProjectRepositoryError> {
        Self::upsert_on(&*self.db, project).await
    }

    async fn delete(&self, name: &str) -> Result<(), ProjectRepositoryError> {
        ProjectEntity::delete_many()
            .filter(ProjectColumn::Name.eq(name))
            .exec(&*self.db)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }

    async fn replace(
        &self,
        old_name: Option<&str>,
        project: Project,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::replace_in(&txn, old_name, project).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
