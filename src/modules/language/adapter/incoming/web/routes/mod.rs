mod add_language;
mod admin_languages;
mod delete_language;
mod update_language;

pub use add_language::add_language_handler;
pub use admin_languages::admin_languages_handler;
pub use delete_language::delete_language_handler;
pub use update_language::update_language_handler;

use uuid::Uuid;

use crate::language::application::domain::entities::LanguageRef;
use crate::shared::web::{FormError, FormFields};

pub const LANGUAGES_PAGE: &str = "/admin/languages";

/// `language_id` wins over `index` when a form carries both.
pub(crate) fn language_ref(fields: &FormFields) -> Result<LanguageRef, FormError> {
    if let Some(raw) = fields.optional("language_id") {
        return Uuid::parse_str(raw.trim())
            .map(LanguageRef::Id)
            .map_err(|_| FormError::InvalidField("language_id".to_string()));
    }

    fields
        .required("index")?
        .trim()
        .parse::<usize>()
        .map(LanguageRef::Index)
        .map_err(|_| FormError::InvalidField("index".to_string()))
}
