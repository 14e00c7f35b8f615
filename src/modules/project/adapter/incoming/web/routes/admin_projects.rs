use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::domain::entities::Project;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct AdminProjectsPage {
    message: String,
    projects: Vec<Project>,
}

#[get("/admin/projects")]
pub async fn admin_projects_handler(
    _admin: AdminUser,
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.projects.list.execute().await {
        Ok(projects) => data.pages.render(
            "admin-projects.html",
            &AdminProjectsPage {
                message: query.into_inner().message,
                projects,
            },
        ),
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            PageRenderer::internal_error()
        }
    }
}
