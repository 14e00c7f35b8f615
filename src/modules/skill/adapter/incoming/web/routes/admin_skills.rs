use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::skill::application::domain::entities::SkillCategory;
use crate::AppState;

#[derive(Serialize)]
struct AdminSkillsPage {
    message: String,
    skills: Vec<SkillCategory>,
}

#[get("/admin/skills")]
pub async fn admin_skills_handler(
    _admin: AdminUser,
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.skills.list.execute().await {
        Ok(skills) => data.pages.render(
            "admin-skills.html",
            &AdminSkillsPage {
                message: query.into_inner().message,
                skills,
            },
        ),
        Err(e) => {
            tracing::error!("Failed to load skills: {}", e);
            PageRenderer::internal_error()
        }
    }
}
