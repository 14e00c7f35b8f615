use sea_orm::entity::prelude::*;

/// Singleton row: the table's check constraint only admits `id = 1`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about_me")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub age: String,
    pub university: String,
    pub degree: String,
    pub year: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub hobbies: Json,
    #[sea_orm(column_type = "Text")]
    pub goals: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
