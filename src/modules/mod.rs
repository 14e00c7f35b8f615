pub mod about;
pub mod auth;
pub mod experience;
pub mod language;
pub mod project;
pub mod site;
pub mod skill;
