//! Cart route handlers.
//!
//! Remove and clear respond with the rebuilt cart page directly.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::{CartPage, CartView};
use crate::store::session::VisitorStore;

/// Remove-from-cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    #[serde(default)]
    pub id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartPage,
    pub notices: Vec<Notice>,
}

/// Display the cart page.
#[instrument(skip_all)]
pub async fn show(VisitorStore(store): VisitorStore) -> Result<CartShowTemplate> {
    let notices = notify::take(&store).await?;
    let cart = CartView::new(store).render().await?;

    Ok(CartShowTemplate { cart, notices })
}

/// Remove every line for a product.
#[instrument(skip(store))]
pub async fn remove(
    VisitorStore(store): VisitorStore,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<CartShowTemplate> {
    let cart = CartView::new(store).remove(&form.id).await?;

    Ok(CartShowTemplate {
        cart,
        notices: Vec::new(),
    })
}

/// Empty the cart.
#[instrument(skip_all)]
pub async fn clear(VisitorStore(store): VisitorStore) -> Result<CartShowTemplate> {
    let cart = CartView::new(store).clear().await?;

    Ok(CartShowTemplate {
        cart,
        notices: Vec::new(),
    })
}
