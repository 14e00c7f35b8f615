use actix_web::{post, web, HttpResponse};

use super::SKILLS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{notice::STORAGE_FAILURE, redirect_with_notice};
use crate::AppState;

#[post("/admin/deleteskill/{skill}")]
pub async fn delete_skill_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let category = path.into_inner();

    match data.skills.delete.execute(category).await {
        Ok(()) => redirect_with_notice(SKILLS_PAGE, "Skill deleted successfully!"),
        Err(e) => {
            tracing::error!("Failed to delete skill category: {}", e);
            redirect_with_notice(SKILLS_PAGE, STORAGE_FAILURE)
        }
    }
}
