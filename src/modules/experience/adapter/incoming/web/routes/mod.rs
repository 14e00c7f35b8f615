mod add_experience;
mod admin_experience;
mod delete_experience;
mod update_experience;

pub use add_experience::add_experience_handler;
pub use admin_experience::admin_experience_handler;
pub use delete_experience::delete_experience_handler;
pub use update_experience::update_experience_handler;

pub const EXPERIENCE_PAGE: &str = "/admin/experience";
