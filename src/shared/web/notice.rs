// src/shared/web/notice.rs
use actix_web::{http::header, HttpResponse, HttpResponseBuilder};
use serde::Deserialize;

use super::FormError;

/// Generic failure notice for a malformed submission.
pub const BAD_REQUEST: &str = "Something Went Wrong! (400)";

/// Failure notice when the database or session store is unavailable.
pub const STORAGE_FAILURE: &str = "Something Went Wrong! (500)";

/// Failure notice naming the offending field or key.
pub fn failure_for(detail: &str) -> String {
    format!("Something Went Wrong! ('{detail}')")
}

/// Notice naming the field that was missing or malformed.
pub fn missing_field(err: &FormError) -> String {
    failure_for(err.field())
}

/// `?message=` query parameter carried by every redirect.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    #[serde(default)]
    pub message: String,
}

pub fn notice_location(path: &str, message: &str) -> String {
    format!("{path}?message={}", urlencoding::encode(message))
}

/// 302 builder pointing at `path` with the notice attached; lets callers
/// add cookies before finishing.
pub fn notice_redirect(path: &str, message: &str) -> HttpResponseBuilder {
    let mut builder = HttpResponse::Found();
    builder.insert_header((header::LOCATION, notice_location(path, message)));
    builder
}

pub fn redirect_with_notice(path: &str, message: &str) -> HttpResponse {
    notice_redirect(path, message).finish()
}
