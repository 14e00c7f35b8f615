use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::experience::application::domain::entities::Experience;
use crate::language::application::domain::entities::Language;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::skill::application::domain::entities::SkillCategory;
use crate::AppState;

#[derive(Serialize)]
struct HomePage {
    message: String,
    skills: Vec<SkillCategory>,
    languages: Vec<Language>,
    experiences: Vec<Experience>,
}

async fn load_home(data: &AppState, message: String) -> Result<HomePage, String> {
    let skills = data.skills.list.execute().await.map_err(|e| e.to_string())?;
    let languages = data
        .languages
        .list
        .execute()
        .await
        .map_err(|e| e.to_string())?;
    let experiences = data
        .experiences
        .list
        .execute()
        .await
        .map_err(|e| e.to_string())?;

    Ok(HomePage {
        message,
        skills,
        languages,
        experiences,
    })
}

#[get("/")]
pub async fn home_handler(
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match load_home(&data, query.into_inner().message).await {
        Ok(page) => data.pages.render("index.html", &page),
        Err(e) => {
            tracing::error!("Failed to load home page content: {}", e);
            PageRenderer::internal_error()
        }
    }
}
