pub mod language_service;

pub use language_service::LanguageService;
