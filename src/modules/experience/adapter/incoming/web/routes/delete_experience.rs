use actix_web::{post, web, HttpResponse};

use super::EXPERIENCE_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::web::{
    form::RawForm,
    notice::{failure_for, missing_field, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/deleteexperience")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let title = match FormFields::from(form).required("old_experience_title") {
        Ok(title) => title,
        Err(e) => return redirect_with_notice(EXPERIENCE_PAGE, &missing_field(&e)),
    };

    match data.experiences.delete.execute(title.clone()).await {
        Ok(()) => redirect_with_notice(EXPERIENCE_PAGE, "Experience deleted successfully!"),
        Err(ExperienceError::NotFound) => {
            redirect_with_notice(EXPERIENCE_PAGE, &failure_for(&title))
        }
        Err(e) => {
            tracing::error!("Failed to delete experience: {}", e);
            redirect_with_notice(EXPERIENCE_PAGE, STORAGE_FAILURE)
        }
    }
}
