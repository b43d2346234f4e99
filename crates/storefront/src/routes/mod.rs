//! HTTP route handlers for storefront.
//!
//! Every page has its own handlers, composing only the components that page
//! needs.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Redirect to /products
//! GET  /health                  - Health check
//! GET  /static/*                - Static assets
//!
//! # Products
//! GET  /products                - Product grid with wishlist/cart controls
//! POST /products/{id}/wishlist  - Toggle wishlist
//! POST /products/{id}/cart      - Add to cart
//!
//! # Wishlist
//! GET  /wishlist                - Wishlist page
//! POST /wishlist/remove         - Remove entry (returns the page)
//!
//! # Cart
//! GET  /cart                    - Cart page
//! POST /cart/remove             - Remove line (returns the page)
//! POST /cart/clear              - Clear cart (returns the page)
//!
//! # Reviews
//! GET  /reviews                 - Review board
//! POST /reviews                 - Submit review
//!
//! # Forms
//! GET  /contact                 - Contact form
//! POST /contact                 - Submit contact form
//! GET  /login                   - Login form
//! POST /login                   - Submit login form
//! ```

pub mod auth;
pub mod cart;
pub mod contact;
pub mod products;
pub mod reviews;
pub mod wishlist;

use axum::{
    Router,
    extract::Request,
    http::Uri,
    middleware::from_fn,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{SessionManagerLayer, SessionStore};

use crate::error::AppError;
use crate::middleware::request_id_middleware;
use crate::notify::{self, Notice};
use crate::state::AppState;
use crate::store::{KeyedListStore, SessionStorage};

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}/wishlist", post(products::toggle_wishlist))
        .route("/{id}/cart", post(products::add_to_cart))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::show))
        .route("/remove", post(wishlist::remove))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/products") }))
        .nest("/products", product_routes())
        .nest("/wishlist", wishlist_routes())
        .nest("/cart", cart_routes())
        .route("/reviews", get(reviews::index).post(reviews::submit))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/login", get(auth::login_page).post(auth::login))
}

/// Build the complete application: pages, health check, static files and
/// the middleware stack.
pub fn app<S>(state: AppState, sessions: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(sessions)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Queue `notices` for the next page and redirect there.
async fn redirect_with(
    store: &KeyedListStore<SessionStorage>,
    notices: Vec<Notice>,
    to: &str,
) -> crate::error::Result<Redirect> {
    notify::stash(store, notices).await?;
    Ok(Redirect::to(to))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use lush_petals_core::{Price, Product, ProductId};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;
    use crate::middleware::{REQUEST_ID_HEADER, SESSION_COOKIE_NAME, memory_session_layer};

    fn test_app() -> Router {
        let config = StorefrontConfig::default();
        let catalog = Catalog::from_products([Product {
            id: ProductId::parse("p1").unwrap(),
            name: "Red Roses Bouquet".to_string(),
            price: "199".parse::<Price>().unwrap(),
            image: "/static/images/red-roses.svg".to_string(),
        }]);
        let sessions = memory_session_layer(&config);
        app(AppState::new(config, catalog), sessions)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let request = Request::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn test_root_redirects_to_products() {
        let response = test_app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/products");
    }

    #[tokio::test]
    async fn test_products_page_renders() {
        let response = test_app().oneshot(get("/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Red Roses Bouquet"));
        assert!(html.contains("/products/p1/wishlist"));
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_cart_page_shows_only_message() {
        let response = test_app().oneshot(get("/cart")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Your shopping cart is empty."));
        assert!(!html.contains("Grand Total"));
        assert!(!html.contains("Clear Cart"));
    }

    #[tokio::test]
    async fn test_empty_wishlist_page_shows_only_message() {
        let response = test_app().oneshot(get("/wishlist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Your wishlist is empty."));
        assert!(!html.contains("wishlist-card"));
    }

    #[tokio::test]
    async fn test_toggle_wishlist_redirects_and_sets_cookie() {
        let request = Request::builder()
            .method("POST")
            .uri("/products/p1/wishlist")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/products");

        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with(SESSION_COOKIE_NAME));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_app().oneshot(get("/gifts")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
