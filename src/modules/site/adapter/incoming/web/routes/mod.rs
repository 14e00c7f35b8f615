mod about;
mod contact;
mod home;
mod projects;

pub use about::about_handler;
pub use contact::{contact_page_handler, submit_contact_handler};
pub use home::home_handler;
pub use projects::projects_handler;
