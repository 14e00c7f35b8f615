use actix_web::{post, web, HttpResponse};

use super::PROJECTS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{
    form::RawForm,
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/deleteproject")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let Ok(name) = FormFields::from(form).required("old_project_name") else {
        return redirect_with_notice(PROJECTS_PAGE, BAD_REQUEST);
    };

    match data.projects.delete.execute(name).await {
        Ok(()) => redirect_with_notice(PROJECTS_PAGE, "Project deleted successfully!"),
        Err(e) => {
            tracing::error!("Failed to delete project: {}", e);
            redirect_with_notice(PROJECTS_PAGE, STORAGE_FAILURE)
        }
    }
}
