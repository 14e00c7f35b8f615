use actix_web::{post, web, HttpResponse};

use super::SKILLS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{
    form::{split_lines, RawForm},
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/addskills")]
pub async fn add_skills_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let (Ok(category), Ok(details)) = (
        fields.required("skill_name"),
        fields.required("skill_details"),
    ) else {
        return redirect_with_notice(SKILLS_PAGE, BAD_REQUEST);
    };

    match data
        .skills
        .add
        .execute(category, split_lines(&details))
        .await
    {
        Ok(()) => redirect_with_notice(SKILLS_PAGE, "Skill added successfully!"),
        Err(e) => {
            tracing::error!("Failed to add skills: {}", e);
            redirect_with_notice(SKILLS_PAGE, STORAGE_FAILURE)
        }
    }
}
