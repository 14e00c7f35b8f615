use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::about::application::domain::entities::AboutMe;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct AdminAboutPage {
    message: String,
    about: Option<AboutMe>,
}

#[get("/admin/about")]
pub async fn admin_about_handler(
    _admin: AdminUser,
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.about.get.execute().await {
        Ok(about) => data.pages.render(
            "admin-about.html",
            &AdminAboutPage {
                message: query.into_inner().message,
                about,
            },
        ),
        Err(e) => {
            tracing::error!("Failed to load about me: {}", e);
            PageRenderer::internal_error()
        }
    }
}
