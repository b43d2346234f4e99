//! Wishlist route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::{WishlistPage, WishlistView};
use crate::store::session::VisitorStore;

/// Remove-from-wishlist form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromWishlistForm {
    #[serde(default)]
    pub id: String,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistShowTemplate {
    pub wishlist: WishlistPage,
    pub notices: Vec<Notice>,
}

/// Display the wishlist page.
#[instrument(skip_all)]
pub async fn show(VisitorStore(store): VisitorStore) -> Result<WishlistShowTemplate> {
    let notices = notify::take(&store).await?;
    let wishlist = WishlistView::new(store).render().await?;

    Ok(WishlistShowTemplate { wishlist, notices })
}

/// Remove a product from the wishlist and show the rebuilt page.
#[instrument(skip(store))]
pub async fn remove(
    VisitorStore(store): VisitorStore,
    Form(form): Form<RemoveFromWishlistForm>,
) -> Result<WishlistShowTemplate> {
    let wishlist = WishlistView::new(store).remove(&form.id).await?;

    Ok(WishlistShowTemplate {
        wishlist,
        notices: Vec::new(),
    })
}
