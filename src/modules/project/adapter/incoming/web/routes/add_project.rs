use actix_web::{post, web, HttpResponse};

use super::PROJECTS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::domain::entities::{normalize_link, Project};
use crate::shared::web::{
    form::{split_list, RawForm},
    notice::{missing_field, STORAGE_FAILURE},
    redirect_with_notice, FormError, FormFields,
};
use crate::AppState;

fn read_project(fields: &FormFields) -> Result<Project, FormError> {
    let name = fields.required("project_name")?;
    let description = fields.required("project_description")?;
    let technologies = split_list(&fields.required("project_tech")?, ',');
    let link = normalize_link(Some(fields.required("project_link")?));

    Ok(Project {
        name,
        description,
        technologies,
        link,
    })
}

#[post("/admin/addproject")]
pub async fn add_project_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let project = match read_project(&FormFields::from(form)) {
        Ok(project) => project,
        Err(e) => return redirect_with_notice(PROJECTS_PAGE, &missing_field(&e)),
    };

    match data.projects.add.execute(project).await {
        Ok(()) => redirect_with_notice(PROJECTS_PAGE, "Project added successfully!"),
        Err(e) => {
            tracing::error!("Failed to add project: {}", e);
            redirect_with_notice(PROJECTS_PAGE, STORAGE_FAILURE)
        }
    }
}
