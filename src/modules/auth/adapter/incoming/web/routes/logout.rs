use actix_web::{get, web, HttpRequest, HttpResponse};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::{
    extractors::AdminUser, session_cookie::removal_cookie,
};
use crate::shared::web::notice::notice_redirect;
use crate::AppState;

pub const LOGGED_OUT: &str = "You have been logged out!";

/// The cookie is cleared even when the store could not revoke the session;
/// the server-side entry then lapses with its TTL.
#[get("/logout")]
pub async fn logout_handler(
    admin: AdminUser,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Some(cookie) = req.cookie(&data.session_cookie.cookie_name) {
        if let Err(e) = data.auth.logout.execute(cookie.value()).await {
            error!(error = %e, "Failed to revoke admin session");
        }
    }

    info!(username = %admin.username(), "Admin logged out");

    notice_redirect("/", LOGGED_OUT)
        .cookie(removal_cookie(&data.session_cookie))
        .finish()
}
