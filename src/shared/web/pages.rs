// src/shared/web/pages.rs
use actix_web::{http::header::ContentType, HttpResponse};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 11] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("projects.html", include_str!("../../../templates/projects.html")),
    ("about.html", include_str!("../../../templates/about.html")),
    ("contact.html", include_str!("../../../templates/contact.html")),
    ("login.html", include_str!("../../../templates/login.html")),
    (
        "admin-skills.html",
        include_str!("../../../templates/admin-skills.html"),
    ),
    (
        "admin-language.html",
        include_str!("../../../templates/admin-language.html"),
    ),
    (
        "admin-experience.html",
        include_str!("../../../templates/admin-experience.html"),
    ),
    (
        "admin-projects.html",
        include_str!("../../../templates/admin-projects.html"),
    ),
    (
        "admin-about.html",
        include_str!("../../../templates/admin-about.html"),
    ),
];

/// Server-side page rendering. Templates are compiled into the binary so the
/// service has no runtime dependency on the working directory.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    pub fn render_to_string<T: Serialize>(
        &self,
        template: &str,
        page: &T,
    ) -> Result<String, tera::Error> {
        let context = Context::from_serialize(page)?;
        self.tera.render(template, &context)
    }

    /// Render `template` as a 200 HTML response, or a bare 500 if rendering
    /// fails.
    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> HttpResponse {
        match self.render_to_string(template, page) {
            Ok(html) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(html),
            Err(e) => {
                tracing::error!("Failed to render {}: {:?}", template, e);
                Self::internal_error()
            }
        }
    }

    pub fn internal_error() -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body("Something Went Wrong! (500)")
    }
}
