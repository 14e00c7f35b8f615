use actix_web::{post, web, HttpResponse};

use super::{language_ref, LANGUAGES_PAGE};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::language::application::ports::incoming::use_cases::LanguageError;
use crate::shared::web::{
    form::RawForm,
    notice::{failure_for, missing_field, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/updatelanguage")]
pub async fn update_language_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let name = match fields.required("language_name") {
        Ok(name) => name,
        Err(e) => return redirect_with_notice(LANGUAGES_PAGE, &missing_field(&e)),
    };
    let target = match language_ref(&fields) {
        Ok(target) => target,
        Err(e) => return redirect_with_notice(LANGUAGES_PAGE, &missing_field(&e)),
    };

    match data.languages.update.execute(target, name).await {
        Ok(()) => redirect_with_notice(LANGUAGES_PAGE, "Language updated successfully!"),
        Err(LanguageError::NotFound) => {
            redirect_with_notice(LANGUAGES_PAGE, &failure_for(target.field_name()))
        }
        Err(e) => {
            tracing::error!("Failed to update language: {}", e);
            redirect_with_notice(LANGUAGES_PAGE, STORAGE_FAILURE)
        }
    }
}
