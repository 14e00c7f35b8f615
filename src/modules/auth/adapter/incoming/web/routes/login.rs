use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::session_cookie::session_cookie;
use crate::auth::application::use_cases::login_admin::{LoginCommand, LoginError};
use crate::shared::web::{
    form::RawForm,
    notice::{notice_redirect, BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields, NoticeQuery,
};
use crate::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid Credentials!";

#[derive(Serialize)]
struct LoginPage {
    message: String,
}

#[get("/login")]
pub async fn login_page_handler(
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.pages.render(
        "login.html",
        &LoginPage {
            message: query.into_inner().message,
        },
    )
}

#[post("/login")]
pub async fn login_handler(form: RawForm, data: web::Data<AppState>) -> HttpResponse {
    let fields = FormFields::from(form);

    let (username, password) = match (fields.required("username"), fields.required("password")) {
        (Ok(u), Ok(p)) => (u, p),
        _ => return redirect_with_notice("/login", BAD_REQUEST),
    };

    match data
        .auth
        .login
        .execute(LoginCommand::new(username.clone(), password))
        .await
    {
        Ok(outcome) => {
            info!(username = %outcome.session.username, "Admin logged in");
            let welcome = format!("Welcome, {}!", outcome.session.username);
            notice_redirect("/admin/skills", &welcome)
                .cookie(session_cookie(&data.session_cookie, outcome.session_token))
                .finish()
        }
        Err(LoginError::InvalidCredentials) => {
            warn!(username = %username, "Login failed: invalid credentials");
            redirect_with_notice("/login", INVALID_CREDENTIALS)
        }
        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Stored password hash could not be verified");
            redirect_with_notice("/login", INVALID_CREDENTIALS)
        }
        Err(e) => {
            error!(error = %e, "Login failed");
            redirect_with_notice("/login", STORAGE_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::{
        domain::entities::{AdminSession, UserId},
        use_cases::login_admin::{ILoginAdminUseCase, LoginOutcome},
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::header, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    #[derive(Clone)]
    struct MockLoginFails(LoginError);

    #[async_trait]
    impl ILoginAdminUseCase for MockLoginFails {
        async fn execute(&self, _command: LoginCommand) -> Result<LoginOutcome, LoginError> {
            Err(self.0.clone())
        }
    }

    #[derive(Clone)]
    struct MockLoginSucceeds;

    #[async_trait]
    impl ILoginAdminUseCase for MockLoginSucceeds {
        async fn execute(&self, command: LoginCommand) -> Result<LoginOutcome, LoginError> {
            Ok(LoginOutcome {
                session_token: "fresh-token".into(),
                session: AdminSession {
                    user_id: UserId::from(Uuid::new_v4()),
                    username: command.username().to_string(),
                },
            })
        }
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_login_success_sets_cookie_and_welcomes() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginSucceeds)
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "admin"), ("password", "admin")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/admin/skills?message=Welcome%2C%20admin%21");

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "portfolio_session")
            .expect("session cookie");
        assert_eq!(cookie.value(), "fresh-token");
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFails(LoginError::InvalidCredentials))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "admin"), ("password", "nope")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/login?message=Invalid%20Credentials%21");
        assert!(resp.response().cookies().next().is_none());
    }

    #[actix_web::test]
    async fn test_login_missing_password_is_bad_request_notice() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "admin")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            location(&resp),
            "/login?message=Something%20Went%20Wrong%21%20%28400%29"
        );
    }

    #[actix_web::test]
    async fn test_login_storage_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFails(LoginError::SessionError("redis down".into())))
            .build();
        let app = test::init_service(App::new().app_data(app_state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("username", "admin"), ("password", "admin")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            location(&resp),
            "/login?message=Something%20Went%20Wrong%21%20%28500%29"
        );
    }

    #[actix_web::test]
    async fn test_login_page_echoes_notice() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(login_page_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/login?message=Invalid%20Credentials%21")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Invalid Credentials!"));
        assert!(html.contains("name=\"username\""));
    }
}
