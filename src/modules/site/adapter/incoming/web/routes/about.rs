use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::about::application::domain::entities::AboutMe;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct AboutPage {
    message: String,
    about: Option<AboutMe>,
}

#[get("/about")]
pub async fn about_handler(
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.about.get.execute().await {
        Ok(about) => data.pages.render(
            "about.html",
            &AboutPage {
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
