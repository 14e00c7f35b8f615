use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::skills::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
    Model as SkillModel,
};
use crate::skill::application::domain::entities::SkillCategory;
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SkillRepositoryError {
        SkillRepositoryError::DatabaseError(e.to_string())
    }

    /// Rows arrive sorted by (category_position, position); consecutive
    /// rows with the same category form one group. A placeholder row
    /// yields its category with no skills.
    fn group(rows: Vec<SkillModel>) -> Vec<SkillCategory> {
        let mut categories: Vec<SkillCategory> = Vec::new();
        for row in rows {
            if categories.last().map_or(true, |last| last.name != row.category) {
                categories.push(SkillCategory::new(row.category, Vec::new()));
            }
            if let (Some(last), Some(name)) = (categories.last_mut(), row.name) {
                last.skills.push(name);
            }
        }
        categories
    }

    async fn last_row_of<C>(conn: &C, category: &str) -> Result<Option<SkillModel>, DbErr>
    where
        C: ConnectionTrait,
    {
        SkillEntity::find()
            .filter(SkillColumn::Category.eq(category))
            .order_by_desc(SkillColumn::Position)
            .one(conn)
            .await
    }

    async fn next_category_position<C>(conn: &C) -> Result<i32, DbErr>
    where
        C: ConnectionTrait,
    {
        let last = SkillEntity::find()
            .order_by_desc(SkillColumn::CategoryPosition)
            .one(conn)
            .await?;
        Ok(last.map(|row| row.category_position + 1).unwrap_or(0))
    }

    fn rows_for(
        category: &str,
        category_position: i32,
        first_position: i32,
        skills: Vec<String>,
    ) -> Vec<SkillActiveModel> {
        let now = Utc::now();
        let names: Vec<Option<String>> = if skills.is_empty() {
            vec![None]
        } else {
            skills.into_iter().map(Some).collect()
        };

        names
            .into_iter()
            .zip(first_position..)
            .map(|(name, position)| SkillActiveModel {
                id: Set(Uuid::new_v4()),
                category: Set(category.to_string()),
                name: Set(name),
                category_position: Set(category_position),
                position: Set(position),
                created_at: Set(now.into()),
            })
            .collect()
    }

    async fn insert_rows(
        txn: &DatabaseTransaction,
        rows: Vec<SkillActiveModel>,
    ) -> Result<(), DbErr> {
        SkillEntity::insert_many(rows)
            .exec_without_returning(txn)
            .await
            .map(|_| ())
    }

    async fn extend_in(
        txn: &DatabaseTransaction,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), DbErr> {
        let (category_position, first_position) = match Self::last_row_of(txn, category).await? {
            Some(_) if skills.is_empty() => return Ok(()),
            // The placeholder gives way to the first real skills.
            Some(last) if last.name.is_none() => {
                SkillEntity::delete_by_id(last.id).exec(txn).await?;
                (last.category_position, last.position)
            }
            Some(last) => (last.category_position, last.position + 1),
            None => (Self::next_category_position(txn).await?, 0),
        };

        Self::insert_rows(
            txn,
            Self::rows_for(category, category_position, first_position, skills),
        )
        .await
    }

    async fn replace_in(
        txn: &DatabaseTransaction,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), DbErr> {
        let category_position = match Self::last_row_of(txn, category).await? {
            Some(existing) => existing.category_position,
            None => Self::next_category_position(txn).await?,
        };

        SkillEntity::delete_many()
            .filter(SkillColumn::Category.eq(category))
            .exec(txn)
            .await?;

        Self::insert_rows(txn, Self::rows_for(category, category_position, 0, skills)).await
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list_categories(&self) -> Result<Vec<SkillCategory>, SkillRepositoryError> {
        let rows = SkillEntity::find()
            .order_by_asc(SkillColumn::CategoryPosition)
            .order_by_asc(SkillColumn::Position)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::group(rows))
    }

    async fn extend_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::extend_in(&txn, category, skills).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn replace_category(
        &self,
        category: &str,
        skills: Vec<String>,
    ) -> Result<(), SkillRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::replace_in(&txn, category, skills).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }

    async fn delete_category(&self, category: &str) -> Result<(), SkillRepositoryError> {
        SkillEntity::delete_many()
            .filter(SkillColumn::Category.eq(category))
            .exec(&*self.db)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn row(category: &str, name: &str, category_position: i32, position: i32) -> SkillModel {
        SkillModel {
            id: Uuid::new_v4(),
            category: category.to_string(),
            name: Some(name.to_string()),
            category_position,
            position,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn group_keeps_category_and_skill_order() {
        let grouped = SkillRepositoryPostgres::group(vec![
            row("Programming", "Python", 0, 0),
            row("Programming", "Java", 0, 1),
            row("Cloud", "AWS", 1, 0),
        ]);

        assert_eq!(
            grouped,
            vec![
                SkillCategory::new("Programming", vec!["Python".into(), "Java".into()]),
                SkillCategory::new("Cloud", vec!["AWS".into()]),
            ]
        );
    }

    fn placeholder(category: &str, category_position: i32) -> SkillModel {
        SkillModel {
            name: None,
            ..row(category, "", category_position, 0)
        }
    }

    #[test]
    fn group_keeps_empty_category() {
        let grouped = SkillRepositoryPostgres::group(vec![
            row("Programming", "Python", 0, 0),
            placeholder("Cloud", 1),
            row("Tools", "Git", 2, 0),
        ]);

        assert_eq!(
            grouped,
            vec![
                SkillCategory::new("Programming", vec!["Python".into()]),
                SkillCategory::new("Cloud", vec![]),
                SkillCategory::new("Tools", vec!["Git".into()]),
            ]
        );
    }

    #[test]
    fn no_skills_become_one_placeholder_row() {
        let rows = SkillRepositoryPostgres::rows_for("Cloud", 3, 0, vec![]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, Set(None));
        assert_eq!(rows[0].category_position, Set(3));
    }

    #[tokio::test]
    async fn test_list_categories() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                row("Tools", "Git", 0, 0),
                row("Tools", "Docker", 0, 1),
            ]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let categories = repo.list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].skills, vec!["Git", "Docker"]);
    }

    #[tokio::test]
    async fn test_extend_existing_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // last row of the category
            .append_query_results(vec![vec![row("Cloud", "Google Cloud", 4, 2)]])
            // insert_many
            .append_exec_results([ok_exec(2)])
            // commit (transaction)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .extend_category("Cloud", vec!["Heroku".into(), "Fly.io".into()])
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_extend_new_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // category not present
            .append_query_results(vec![Vec::<SkillModel>::new()])
            // highest category position
            .append_query_results(vec![vec![row("Cloud", "AWS", 4, 0)]])
            .append_exec_results([ok_exec(1)])
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.extend_category("Testing", vec!["Pytest".into()]).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_replace_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Programming", "CSS", 0, 5)]])
            // delete old rows
            .append_exec_results([ok_exec(6)])
            // insert new rows
            .append_exec_results([ok_exec(2)])
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .replace_category("Programming", vec!["Rust".into(), "Go".into()])
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_replace_failure_rolls_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Programming", "CSS", 0, 5)]])
            .append_exec_errors([DbErr::Custom("lock timeout".into())])
            // rollback (transaction)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.replace_category("Programming", vec!["Rust".into()]).await;

        assert!(matches!(
            result,
            Err(SkillRepositoryError::DatabaseError(msg)) if msg.contains("lock timeout")
        ));
    }

    #[tokio::test]
    async fn test_replace_with_no_skills_keeps_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Cloud", "AWS", 1, 0)]])
            // delete old rows
            .append_exec_results([ok_exec(1)])
            // placeholder row
            .append_exec_results([ok_exec(1)])
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(repo.replace_category("Cloud", vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_extend_empty_category_drops_placeholder() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![placeholder("Cloud", 1)]])
            // delete placeholder
            .append_exec_results([ok_exec(1)])
            // insert_many
            .append_exec_results([ok_exec(1)])
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(repo.extend_category("Cloud", vec!["AWS".into()]).await.is_ok());
    }

    #[tokio::test]
    async fn test_extend_existing_category_with_no_skills_writes_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row("Cloud", "AWS", 1, 0)]])
            // commit only
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(repo.extend_category("Cloud", vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_absent_category_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_category("Nope").await.is_ok());
    }
}
