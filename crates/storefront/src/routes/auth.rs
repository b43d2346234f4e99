//! Login route handlers.
//!
//! Login is simulated: the form is captured into the visitor's storage and
//! no credentials are checked. There is no logged-in state.

use core::fmt;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::Redirect};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::LoginIntake;
use crate::store::session::VisitorStore;

use super::redirect_with;

/// Login form data.
///
/// Implements `Debug` manually to redact the password.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub notices: Vec<Notice>,
}

/// Display the login form.
#[instrument(skip_all)]
pub async fn login_page(VisitorStore(store): VisitorStore) -> Result<LoginTemplate> {
    let notices = notify::take(&store).await?;
    Ok(LoginTemplate { notices })
}

/// Capture a login attempt.
#[instrument(skip_all)]
pub async fn login(
    VisitorStore(store): VisitorStore,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let mut notices = Vec::new();
    LoginIntake::new(store.clone())
        .submit(&form.email, &form.password, Utc::now(), &mut notices)
        .await?;

    redirect_with(&store, notices, "/login").await
}
