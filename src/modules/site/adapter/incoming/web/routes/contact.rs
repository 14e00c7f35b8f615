use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;

use crate::shared::web::{
    form::RawForm, notice::BAD_REQUEST, redirect_with_notice, FormError, FormFields,
    NoticeQuery,
};
use crate::AppState;

const THANK_YOU: &str = "Thank you for your message!";

#[derive(Serialize)]
struct ContactPage {
    message: String,
}

/// A visitor's message. Only the subject and sender are logged; nothing is
/// stored or sent.
#[derive(Debug)]
struct ContactMessage {
    name: String,
    email: String,
    subject: String,
}

impl ContactMessage {
    /// The body must be present but is discarded.
    fn from_fields(fields: &FormFields) -> Result<Self, FormError> {
        let message = Self {
            name: fields.required("name")?,
            email: fields.required("email")?,
            subject: fields.required("subject")?,
        };
        fields.required("message")?;
        Ok(message)
    }
}

#[get("/contact")]
pub async fn contact_page_handler(
    query: web::Query<NoticeQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    data.pages.render(
        "contact.html",
        &ContactPage {
            message: query.into_inner().message,
        },
    )
}

#[post("/contact")]
pub async fn submit_contact_handler(form: RawForm) -> HttpResponse {
    match ContactMessage::from_fields(&FormFields::from(form)) {
        Ok(contact) => {
            tracing::info!(
                subject = %contact.subject,
                from = %contact.email,
                sender = %contact.name,
                "Contact message received"
            );
            redirect_with_notice("/", THANK_YOU)
        }
        Err(e) => {
            tracing::warn!("Rejected contact message: {}", e);
            redirect_with_notice("/", BAD_REQUEST)
        }
    }
}
