pub mod about_service;

pub use about_service::AboutService;
