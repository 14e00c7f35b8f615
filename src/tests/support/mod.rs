pub mod app_state_builder;
pub mod fakes;

use actix_web::{cookie::Cookie, dev::ServiceResponse, http::header};

use app_state_builder::TEST_SESSION_TOKEN;

#[cfg(test)]
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}

/// Cookie carrying the session pre-registered by `TestAppStateBuilder`.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::new("portfolio_session", TEST_SESSION_TOKEN)
}

/// `Location` header of a redirect, or an empty string.
pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
