use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// The single "about me" profile. Every field is display text; `age` and
/// `year` are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutMe {
    pub name: String,
    pub age: String,
    pub university: String,
    pub degree: String,
    pub year: String,
    pub bio: String,
    pub hobbies: Vec<String>,
    pub goals: String,
    pub contact: Contact,
}
