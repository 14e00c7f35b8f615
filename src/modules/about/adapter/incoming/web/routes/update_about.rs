use actix_web::{post, web, HttpResponse};

use super::ABOUT_PAGE;
use crate::about::application::domain::entities::{AboutMe, Contact};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{
    form::{split_list, RawForm},
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormError, FormFields,
};
use crate::AppState;

fn read_about(fields: &FormFields) -> Result<AboutMe, FormError> {
    Ok(AboutMe {
        name: fields.required("name")?,
        age: fields.required("age")?,
        university: fields.required("university")?,
        degree: fields.required("degree")?,
        year: fields.required("year")?,
        bio: fields.required("bio")?,
        hobbies: split_list(&fields.required("hobbies")?, ','),
        goals: fields.required("goals")?,
        contact: Contact {
            email: fields.required("email")?,
            phone: fields.required("phone")?,
            linkedin: fields.required("linkedin")?,
            github: fields.required("github")?,
        },
    })
}

#[post("/admin/updateabout")]
pub async fn update_about_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let about = match read_about(&FormFields::from(form)) {
        Ok(about) => about,
        Err(e) => {
            tracing::warn!("Rejected about me update: {}", e);
            return redirect_with_notice(ABOUT_PAGE, BAD_REQUEST);
        }
    };

    match data.about.update.execute(about).await {
        Ok(()) => redirect_with_notice(ABOUT_PAGE, "About Me updated successfully!"),
        Err(e) => {
            tracing::error!("Failed to update about me: {}", e);
            redirect_with_notice(ABOUT_PAGE, STORAGE_FAILURE)
        }
    }
}
