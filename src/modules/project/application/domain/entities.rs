use serde::Serialize;

/// A showcased project, keyed by its unique `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// `None` when the form left the link blank.
    pub link: Option<String>,
}

/// Blank or whitespace-only links mean "no link".
pub fn normalize_link(raw: Option<String>) -> Option<String> {
    raw.filter(|link| !link.trim().is_empty())
}
