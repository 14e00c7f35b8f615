use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::config::SessionCookieConfig;

/// Cookie carrying a freshly issued session token.
pub fn session_cookie(config: &SessionCookieConfig, token: String) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .max_age(Duration::seconds(config.ttl_seconds as i64))
        .finish()
}

/// Expired cookie that makes the browser drop the session token.
pub fn removal_cookie(config: &SessionCookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure)
        .finish();
    cookie.make_removal();
    cookie
}
