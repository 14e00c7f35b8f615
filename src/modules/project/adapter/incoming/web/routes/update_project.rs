use actix_web::{post, web, HttpResponse};

use super::PROJECTS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::domain::entities::{normalize_link, Project};
use crate::shared::web::{
    form::{split_list, RawForm},
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/updateproject")]
pub async fn update_project_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let Ok(name) = fields.required("project_name") else {
        return redirect_with_notice(PROJECTS_PAGE, BAD_REQUEST);
    };

    // Everything except the new name is optional on this form.
    let project = Project {
        name,
        description: fields.optional("project_description").unwrap_or_default(),
        technologies: split_list(&fields.optional("project_tech").unwrap_or_default(), ','),
        link: normalize_link(fields.optional("project_link")),
    };

    match data
        .projects
        .update
        .execute(fields.optional("old_project_name"), project)
        .await
    {
        Ok(()) => redirect_with_notice(PROJECTS_PAGE, "Project updated successfully!"),
        Err(e) => {
            tracing::error!("Failed to update project: {}", e);
            redirect_with_notice(PROJECTS_PAGE, STORAGE_FAILURE)
        }
    }
}
