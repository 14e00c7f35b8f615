use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
}

/// How an admin form addresses a language: by its stable id, or by its
/// position in the ordering the admin page showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRef {
    Id(Uuid),
    Index(usize),
}

impl LanguageRef {
    /// Form field this reference was read from.
    pub fn field_name(&self) -> &'static str {
        match self {
            LanguageRef::Id(_) => "language_id",
            LanguageRef::Index(_) => "index",
        }
    }
}
