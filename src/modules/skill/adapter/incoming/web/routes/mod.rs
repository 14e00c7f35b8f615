mod add_skills;
mod admin_skills;
mod delete_skill;
mod update_skill;

pub use add_skills::add_skills_handler;
pub use admin_skills::admin_skills_handler;
pub use delete_skill::delete_skill_handler;
pub use update_skill::update_skill_handler;

pub const SKILLS_PAGE: &str = "/admin/skills";
