pub mod auth;

pub use auth::{login_redirect, AdminUser, LOGIN_REQUIRED};
