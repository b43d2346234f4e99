//! Review board route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lush_petals_core::Review;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::{ReviewBoard, ReviewSubmission};
use crate::store::session::VisitorStore;

use super::redirect_with;

/// New review form data.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
}

/// Review board template.
#[derive(Template, WebTemplate)]
#[template(path = "reviews/index.html")]
pub struct ReviewsIndexTemplate {
    pub reviews: Vec<Review>,
    pub form: ReviewForm,
    pub notices: Vec<Notice>,
}

/// Display the review board with an empty form.
#[instrument(skip_all)]
pub async fn index(VisitorStore(store): VisitorStore) -> Result<ReviewsIndexTemplate> {
    let notices = notify::take(&store).await?;
    let reviews = ReviewBoard::new(store).load().await?;

    Ok(ReviewsIndexTemplate {
        reviews,
        form: ReviewForm::default(),
        notices,
    })
}

/// Submit a review.
///
/// A blank review re-renders the board with the error and the visitor's
/// input intact.
#[instrument(skip_all)]
pub async fn submit(
    VisitorStore(store): VisitorStore,
    Form(form): Form<ReviewForm>,
) -> Result<Response> {
    let board = ReviewBoard::new(store.clone());
    let mut notices = Vec::new();

    match board.submit(&form.author, &form.text, &mut notices).await? {
        ReviewSubmission::Accepted(_) => Ok(redirect_with(&store, notices, "/reviews")
            .await?
            .into_response()),
        ReviewSubmission::Rejected => {
            let reviews = board.load().await?;
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                ReviewsIndexTemplate {
                    reviews,
                    form,
                    notices,
                },
            )
                .into_response())
        }
    }
}
