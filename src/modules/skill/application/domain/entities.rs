use serde::Serialize;

/// A named group of skills, e.g. "Databases" → ["MySQL", "PostgreSQL"].
/// Both the categories and the skills inside them keep their display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(name: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }
}
