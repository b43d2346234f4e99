//! Contact form route handlers.
//!
//! Submissions are kept in the visitor's own storage; nothing is sent
//! anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::ContactIntake;
use crate::store::session::VisitorStore;

use super::redirect_with;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/show.html")]
pub struct ContactShowTemplate {
    pub notices: Vec<Notice>,
}

/// Display the contact form.
#[instrument(skip_all)]
pub async fn show(VisitorStore(store): VisitorStore) -> Result<ContactShowTemplate> {
    let notices = notify::take(&store).await?;
    Ok(ContactShowTemplate { notices })
}

/// Store a contact submission and return to a fresh form.
#[instrument(skip_all)]
pub async fn submit(
    VisitorStore(store): VisitorStore,
    Form(form): Form<ContactForm>,
) -> Result<Redirect> {
    let mut notices = Vec::new();
    ContactIntake::new(store.clone())
        .submit(&form.name, &form.phone, &form.message, Utc::now(), &mut notices)
        .await?;

    redirect_with(&store, notices, "/contact").await
}
