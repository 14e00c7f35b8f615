use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::language::application::domain::entities::Language;
use crate::shared::web::{NoticeQuery, PageRenderer};
use crate::AppState;

#[derive(Serialize)]
struct AdminLanguagesPage {
    message: String,
    languages: Vec<Language>,
}

#[get("/admin/languages")]
pub async fn admin_languages_handler(
    _admin: AdminUser,
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.languages.list.execute().await {
        Ok(languages) => data.pages.render(
            "admin-language.html",
            &AdminLanguagesPage {
                message: query.into_inner().message,
                languages,
            },
        ),
        Err(e) => {
            tracing::error!("Failed to load languages: {}", e);
            PageRenderer::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, fakes::InMemoryLanguageRepository, session_cookie,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_admin_languages_lists_names_and_ids() {
        let repo = InMemoryLanguageRepository::with_names(&["English", "Spanish"]);
        let english_id = repo.snapshot()[0].id;
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_languages(repo).build())
                .service(admin_languages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/languages?message=Language%20added%20successfully%21")
            .cookie(session_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Language added successfully!"));
        assert!(html.contains("English"));
        assert!(html.contains("Spanish"));
        assert!(html.contains(&english_id.to_string()));
    }

    #[actix_web::test]
    async fn test_admin_languages_storage_failure_is_500() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_languages(InMemoryLanguageRepository::failing())
                        .build(),
                )
                .service(admin_languages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/languages")
            .cookie(session_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
