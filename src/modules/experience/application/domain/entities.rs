use serde::Serialize;

/// A work history entry, keyed by its unique `title`.
///
/// `dates` is free text such as "Jan 2019 - Present"; nothing here parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub title: String,
    pub company_name: String,
    pub position: String,
    pub dates: String,
    pub description: String,
}

/// Joins the separate start and end inputs of the add form.
pub fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}
