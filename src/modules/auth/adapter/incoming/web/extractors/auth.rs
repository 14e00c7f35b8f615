use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::auth::application::{
    domain::entities::AdminSession, use_cases::resolve_session::ResolveSessionError,
};
use crate::shared::web::redirect_with_notice;
use crate::AppState;

pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

pub fn login_redirect() -> HttpResponse {
    redirect_with_notice("/login", LOGIN_REQUIRED)
}

fn reject(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Administrator resolved from the session cookie. Handlers that take this
/// extractor are admin routes; anonymous callers get bounced to `/login`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminSession);

impl AdminUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            tracing::error!("AppState missing while resolving admin session");
            return Box::pin(async { Err(reject(HttpResponse::InternalServerError().finish())) });
        };

        let token = req
            .cookie(&state.session_cookie.cookie_name)
            .map(|c| c.value().to_string());

        Box::pin(async move {
            let Some(token) = token else {
                return Err(reject(login_redirect()));
            };

            match state.auth.resolve_session.execute(&token).await {
                Ok(session) => Ok(AdminUser(session)),
                Err(ResolveSessionError::NoSession) => Err(reject(login_redirect())),
                Err(ResolveSessionError::LookupFailed(e)) => {
                    tracing::error!("Session lookup failed: {}", e);
                    Err(reject(login_redirect()))
                }
            }
        })
    }
}
