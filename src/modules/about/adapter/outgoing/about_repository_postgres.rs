use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::about_me::{
    ActiveModel as AboutActiveModel, Column as AboutColumn, Entity as AboutEntity,
    Model as AboutModel,
};
use crate::about::application::domain::entities::{AboutMe, Contact};
use crate::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};

const PROFILE_ID: i32 = 1;

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AboutRepositoryError {
        AboutRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: AboutModel) -> Result<AboutMe, AboutRepositoryError> {
        let hobbies = serde_json::from_value(model.hobbies)
            .map_err(|e| AboutRepositoryError::SerializationError(e.to_string()))?;

        Ok(AboutMe {
            name: model.name,
            age: model.age,
            university: model.university,
            degree: model.degree,
            year: model.year,
            bio: model.bio,
            hobbies,
            goals: model.goals,
            contact: Contact {
                email: model.email,
                phone: model.phone,
                linkedin: model.linkedin,
                github: model.github,
            },
        })
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn get(&self) -> Result<Option<AboutMe>, AboutRepositoryError> {
        AboutEntity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::to_domain)
            .transpose()
    }

    async fn save(&self, about: AboutMe) -> Result<(), AboutRepositoryError> {
        let hobbies = serde_json::to_value(&about.hobbies)
            .map_err(|e| AboutRepositoryError::SerializationError(e.to_string()))?;

        let row = AboutActiveModel {
            id: Set(PROFILE_ID),
            name: Set(about.name),
            age: Set(about.age),
            university: Set(about.university),
            degree: Set(about.degree),
            year: Set(about.year),
            bio: Set(about.bio),
            hobbies: Set(hobbies),
            goals: Set(about.goals),
            email: Set(about.contact.email),
            phone: Set(about.contact.phone),
            linkedin: Set(about.contact.linkedin),
            github: Set(about.contact.github),
            updated_at: Set(Utc::now().into()),
        };

        AboutEntity::insert(row)
            .on_conflict(
                OnConflict::column(AboutColumn::Id)
                    .update_columns([
                        AboutColumn::Name,
                        AboutColumn::Age,
                        AboutColumn::University,
                        AboutColumn::Degree,
                        AboutColumn::Year,
                        AboutColumn::Bio,
                        AboutColumn::Hobbies,
                        AboutColumn::Goals,
                        AboutColumn::Email,
                        AboutColumn::Phone,
                        AboutColumn::Linkedin,
                        AboutColumn::Github,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map(|_| ())
            .map_err(Self::map_db_err)
    }
}
