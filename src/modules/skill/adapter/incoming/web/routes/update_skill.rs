use actix_web::{post, web, HttpResponse};

use super::SKILLS_PAGE;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::web::{
    form::RawForm,
    notice::{BAD_REQUEST, STORAGE_FAILURE},
    redirect_with_notice, FormFields,
};
use crate::AppState;

#[post("/admin/updateskill")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    form: RawForm,
    data: web::Data<AppState>,
) -> HttpResponse {
    let fields = FormFields::from(form);

    let Ok(category) = fields.required("skill_name") else {
        return redirect_with_notice(SKILLS_PAGE, BAD_REQUEST);
    };

    // Each input box is one skill; the spare "new skill" box is usually blank.
    let skills: Vec<String> = fields
        .all("skill_details")
        .iter()
        .map(|skill| skill.trim())
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect();

    match data.skills.update.execute(category, skills).await {
        Ok(()) => redirect_with_notice(SKILLS_PAGE, "Skill updated successfully!"),
        Err(e) => {
            tracing::error!("Failed to update skill category: {}", e);
            redirect_with_notice(SKILLS_PAGE, STORAGE_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::domain::entities::SkillCategory;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, fakes::InMemorySkillRepository, location,
        session_cookie,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_update_skill_replaces_list_in_place() {
        let repo = InMemorySkillRepository::with_categories(&[
            ("Programming", &["Python", "Java"]),
            ("Cloud", &["AWS"]),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_skills(repo.clone()).build())
                .service(update_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/updateskill")
            .cookie(session_cookie())
            .set_form([
                ("skill_name", "Programming"),
                ("skill_details", "Rust"),
                ("skill_details", " Go "),
                ("skill_details", ""),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            location(&resp),
            "/admin/skills?message=Skill%20updated%20successfully%21"
        );
        assert_eq!(
            repo.snapshot(),
            vec![
                SkillCategory::new("Programming", vec!["Rust".into(), "Go".into()]),
                SkillCategory::new("Cloud", vec!["AWS".into()]),
            ]
        );
    }

    #[actix_web::test]
    async fn test_update_skill_with_blank_details_keeps_empty_category() {
        let repo = InMemorySkillRepository::with_categories(&[
            ("Programming", &["Python"]),
            ("Cloud", &["AWS"]),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_skills(repo.clone()).build())
                .service(update_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/updateskill")
            .cookie(session_cookie())
            .set_form([
                ("skill_name", "Programming"),
                ("skill_details", "  "),
                ("skill_details", ""),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            location(&resp),
            "/admin/skills?message=Skill%20updated%20successfully%21"
        );
        assert_eq!(
            repo.snapshot(),
            vec![
                SkillCategory::new("Programming", vec![]),
                SkillCategory::new("Cloud", vec!["AWS".into()]),
            ]
        );
    }

    #[actix_web::test]
    async fn test_update_skill_missing_name_is_bad_request() {
        let repo = InMemorySkillRepository::with_categories(&[("Cloud", &["AWS"])]);
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_skills(repo.clone()).build())
                .service(update_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/updateskill")
            .cookie(session_cookie())
            .set_form([("skill_details", "Azure")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            location(&resp),
            "/admin/skills?message=Something%20Went%20Wrong%21%20%28400%29"
        );
        assert_eq!(
            repo.snapshot(),
            vec![SkillCategory::new("Cloud", vec!["AWS".into()])]
        );
    }
}
