use actix_web::{post, web, HttpResponse};

use super::EXPERIENCE_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::domain::entities::Experience;
use crate::experience::application::ports::incoming::use_cases::ExperienceError;
use crate::shared::web::{
    form::RawForm,
    notice::{failure_for, missing_field, STORAGE_FAILURE},
    redirect_with_notice, FormError, FormFields,
};
use crate::AppState;

fn read_update(fields: &FormFields) -> Result<(String, Experience), FormError> {
    let old_title = fields.required("old_experience_title")?;
    let experience = Experience {
        title: fields.required("experience_title")?,
        company_name: fields.required("name")?,
        position: fields.required("position")?,
        dates: fields.required("dates")?,
        description: fields.required("description")?,
    };
    Ok((old_title, experience))
}

#[post("/admin/updateexperience")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let (old_title, experience) = match read_update(&FormFields::from(form)) {
        Ok(parsed) => parsed,
        Err(e) => return redirect_with_notice(EXPERIENCE_PAGE, &missing_field(&e)),
    };

    match data
        .experiences
        .update
        .execute(old_title.clone(), experience)
        .await
    {
        Ok(()) => redirect_with_notice(EXPERIENCE_PAGE, "Experience updated successfully!"),
        Err(ExperienceError::NotFound) => {
            redirect_with_notice(EXPERIENCE_PAGE, &failure_for(&old_title))
        }
        Err(e) => {
            tracing::error!("Failed to update experience: {}", e);
            redirect_with_notice(EXPERIENCE_PAGE, STORAGE_FAILURE)
        }
    }
}
