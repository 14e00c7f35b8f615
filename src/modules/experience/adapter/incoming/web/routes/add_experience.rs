use actix_web::{post, web, HttpResponse};

use super::EXPERIENCE_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::domain::entities::{date_range, Experience};
use crate::shared::web::{
    form::RawForm,
    notice::{missing_field, STORAGE_FAILURE},
    redirect_with_notice, FormError, FormFields,
};
use crate::AppState;

fn read_experience(fields: &FormFields) -> Result<Experience, FormError> {
    let title = fields.required("experience_title")?;
    let company_name = fields.required("experience_company")?;
    let position = fields.required("experience_position")?;
    let start = fields.required("experience_start_date")?;
    let end = fields.required("experience_end_date")?;
    let description = fields.required("experience_description")?;

    Ok(Experience {
        title,
        company_name,
        position,
        dates: date_range(&start, &end),
        description,
    })
}

#[post("/admin/addexperience")]
pub async fn add_experience_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let experience = match read_experience(&FormFields::from(form)) {
        Ok(experience) => experience,
        Err(e) => return redirect_with_notice(EXPERIENCE_PAGE, &missing_field(&e)),
    };

    match data.experiences.add.execute(experience).await {
        Ok(()) => redirect_with_notice(EXPERIENCE_PAGE, "Experience added successfully!"),
        Err(e) => {
            tracing::error!("Failed to add experience: {}", e);
            redirect_with_notice(EXPERIENCE_PAGE, STORAGE_FAILURE)
        }
    }
}
