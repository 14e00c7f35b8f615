use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::Category).string_len(250).not_null())
                    // NULL name: placeholder row of a category with no skills
                    .col(ColumnDef::new(Skills::Name).string_len(250).null())
                    .col(
                        ColumnDef::new(Skills::CategoryPosition)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Skills::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Category lookups for extend / replace / delete
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_category
                ON skills (category);

                CREATE INDEX IF NOT EXISTS idx_skills_ordering
                ON skills (category_position, position);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP INDEX IF EXISTS idx_skills_category; DROP INDEX IF EXISTS idx_skills_ordering;",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Category,
    Name,
    CategoryPosition,
    Position,
    CreatedAt,
}
