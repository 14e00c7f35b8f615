use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton table: the service only ever reads and writes id = 1
        manager
            .create_table(
                Table::create()
                    .table(AboutMe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutMe::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AboutMe::Name).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Age).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::University).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Degree).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Year).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Bio).text().not_null())
                    .col(ColumnDef::new(AboutMe::Hobbies).json_binary().not_null())
                    .col(ColumnDef::new(AboutMe::Goals).text().not_null())
                    .col(ColumnDef::new(AboutMe::Email).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Phone).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Linkedin).string_len(250).not_null())
                    .col(ColumnDef::new(AboutMe::Github).string_len(250).not_null())
                    .col(
                        ColumnDef::new(AboutMe::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(AboutMe::Id).eq(1))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_about_me_updated_at ON about_me;
                CREATE TRIGGER update_about_me_updated_at
                BEFORE UPDATE ON about_me
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_about_me_updated_at ON about_me;")
            .await?;

        manager
            .drop_table(Table::drop().table(AboutMe::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutMe {
    Table,
    Id,
    Name,
    Age,
    University,
    Degree,
    Year,
    Bio,
    Hobbies,
    Goals,
    Email,
    Phone,
    Linkedin,
    Github,
    UpdatedAt,
}
