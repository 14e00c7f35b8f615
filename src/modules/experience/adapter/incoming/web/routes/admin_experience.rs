use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::domain::entities::Experience;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct AdminExperiencePage {
    message: String,
    experiences: Vec<Experience>,
}

#[get("/admin/experience")]
pub async fn admin_experience_handler(
    _admin: AdminUser,
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.experiences.list.execute().await {
        Ok(experiences) => data.pages.render(
            "admin-experience.html",
            &AdminExperiencePage {
                message: query.into_inner().message,
                experiences,
            },
        ),
        Err(e) => {
            tracing::error!("Failed to load experiences: {}", e);
            PageRenderer::internal_error()
        }
    }
}
