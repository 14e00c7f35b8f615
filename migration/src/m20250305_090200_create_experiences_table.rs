use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Title)
                            .string_len(250)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Experiences::CompanyName)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .string_len(250)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Dates).string_len(250).not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_experiences_updated_at ON experiences;
                CREATE TRIGGER update_experiences_updated_at
                BEFORE UPDATE ON experiences
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_experiences_updated_at ON experiences;",
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(Experiences::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    CompanyName,
    Position,
    Dates,
    Description,
    CreatedAt,
    UpdatedAt,
}
