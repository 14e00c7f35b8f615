// src/shared/web/form.rs
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

/// Raw `application/x-www-form-urlencoded` body, keeping repeated keys.
///
/// A body that is absent or not urlencoded extracts as no fields at all, so
/// the handler answers with its own missing-field notice.
#[derive(Debug, Clone, Default)]
pub struct RawForm(pub Vec<(String, String)>);

impl FromRequest for RawForm {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let form = web::Form::<Vec<(String, String)>>::from_request(req, payload);

        Box::pin(async move {
            match form.await {
                Ok(form) => Ok(RawForm(form.into_inner())),
                Err(e) => {
                    tracing::debug!("Unreadable form body treated as empty: {}", e);
                    Ok(RawForm::default())
                }
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Missing form field '{0}'")]
    MissingField(String),

    #[error("Malformed form field '{0}'")]
    InvalidField(String),
}

impl FormError {
    pub fn field(&self) -> &str {
        match self {
            FormError::MissingField(field) | FormError::InvalidField(field) => field,
        }
    }
}

/// Submitted form fields in submission order.
///
/// Field values are opaque strings: nothing is trimmed, parsed or validated
/// here. A field that was submitted empty is still *present*.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `field`.
    pub fn required(&self, field: &str) -> Result<String, FormError> {
        self.optional(field)
            .ok_or_else(|| FormError::MissingField(field.to_string()))
    }

    pub fn optional(&self, field: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.clone())
    }

    /// Every value submitted under `field` (multi-value inputs).
    pub fn all(&self, field: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == field)
            .map(|(_, value)| value.clone())
            .collect()
    }
}

impl From<RawForm> for FormFields {
    fn from(form: RawForm) -> Self {
        Self::new(form.0)
    }
}

/// Split a delimited list, trimming entries and dropping blanks.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split textarea input into one entry per line (`\n` or `\r\n`).
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
