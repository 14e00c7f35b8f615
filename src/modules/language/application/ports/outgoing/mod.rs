pub mod language_repository;

pub use language_repository::{LanguageRepository, LanguageRepositoryError};
