//! Product listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::notify::{self, Notice};
use crate::services::{ProductCard, ProductCatalogBinding};
use crate::state::AppState;
use crate::store::session::VisitorStore;

use super::redirect_with;

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub cards: Vec<ProductCard>,
    pub notices: Vec<Notice>,
}

/// Display the product grid.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    VisitorStore(store): VisitorStore,
) -> Result<ProductsIndexTemplate> {
    let notices = notify::take(&store).await?;
    let cards = ProductCatalogBinding::new(store)
        .bind(state.catalog().products())
        .await?;

    Ok(ProductsIndexTemplate { cards, notices })
}

/// Toggle a product on the wishlist, then return to the grid.
///
/// Unknown product ids are ignored.
#[instrument(skip(state, store))]
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    VisitorStore(store): VisitorStore,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let Some(product) = state.catalog().find(&id) else {
        tracing::debug!("Ignoring wishlist toggle for unknown product");
        return Ok(Redirect::to("/products"));
    };

    let mut notices = Vec::new();
    ProductCatalogBinding::new(store.clone())
        .toggle_wishlist(product, &mut notices)
        .await?;

    redirect_with(&store, notices, "/products").await
}

/// Add one unit of a product to the cart, then return to the grid.
///
/// Unknown product ids are ignored.
#[instrument(skip(state, store))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    VisitorStore(store): VisitorStore,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let Some(product) = state.catalog().find(&id) else {
        tracing::debug!("Ignoring add to cart for unknown product");
        return Ok(Redirect::to("/products"));
    };

    let mut notices = Vec::new();
    ProductCatalogBinding::new(store.clone())
        .add_to_cart(product, &mut notices)
        .await?;

    redirect_with(&store, notices, "/products").await
}
