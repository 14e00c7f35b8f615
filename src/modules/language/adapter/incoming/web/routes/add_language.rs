use actix_web::{post, web, HttpResponse};

use super::LANGUAGES_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{
    form::RawForm,
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/addlanguage")]
pub async fn add_language_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let Ok(name) = fields.required("language_name") else {
        return redirect_with_notice(LANGUAGES_PAGE, BAD_REQUEST);
    };

    match data.languages.add.execute(name).await {
        Ok(language) => {
            tracing::info!(language_id = %language.id, "Language added");
            redirect_with_notice(LANGUAGES_PAGE, "Language added successfully!")
        }
        Err(e) => {
            tracing::error!("Failed to add language: {}", e);
            redirect_with_notice(LANGUAGES_PAGE, STORAGE_FAILURE)
        }
    }
}
