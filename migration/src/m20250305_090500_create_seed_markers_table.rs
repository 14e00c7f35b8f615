use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per one-shot data seed that has already run
        manager
            .create_table(
                Table::create()
                    .table(SeedMarkers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeedMarkers::Name)
                            .string_len(100)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeedMarkers::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeedMarkers::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SeedMarkers {
    Table,
    Name,
    AppliedAt,
}
