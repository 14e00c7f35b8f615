mod admin_about;
mod update_about;

pub use admin_about::admin_about_handler;
pub use update_about::update_about_handler;

pub const ABOUT_PAGE: &str = "/admin/about";
