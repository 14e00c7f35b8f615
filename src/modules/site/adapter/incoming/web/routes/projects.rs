use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::project::application::domain::entities::Project;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct ProjectsPage {
    message: String,
    projects: Vec<Project>,
}

#[get("/projects")]
pub async fn projects_handler(
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.projects.list.execute().await {
        Ok(projects) => data.pages.render(
            "projects.html",
            &ProjectsPage {
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
