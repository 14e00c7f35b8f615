mod add_project;
mod admin_projects;
mod delete_project;
mod update_project;

pub use add_project::add_project_handler;
pub use admin_projects::admin_projects_handler;
pub use delete_project::delete_project_handler;
pub use update_project::update_project_handler;

pub const PROJECTS_PAGE: &str = "/admin/projects";
