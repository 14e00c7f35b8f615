use actix_web::{post, web, HttpResponse};

use super::{language_ref, LANGUAGES_PAGE};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::language::application::ports::incoming::use_cases::LanguageError;
use crate::shared::web::{
    form::RawForm,
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/deletelanguage")]
pub async fn delete_language_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let Ok(target) = language_ref(&fields) else {
        return redirect_with_notice(LANGUAGES_PAGE, BAD_REQUEST);
    };

    match data.languages.delete.execute(target).await {
        Ok(()) => redirect_with_notice(LANGUAGES_PAGE, "Language deleted successfully!"),
        Err(LanguageError::NotFound) => redirect_with_notice(LANGUAGES_PAGE, BAD_REQUEST),
        Err(e) => {
            tracing::error!("Failed to delete language: {}", e);
            redirect_with_notice(LANGUAGES_PAGE, STORAGE_FAILURE)
        }
    }
}
