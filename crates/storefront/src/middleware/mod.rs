//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request span)
//! 2. Request ID (add unique ID to each request, recorded in the span)
//! 3. Session layer (tower-sessions, memory or `PostgreSQL` store)

pub mod request_id;
pub mod session;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::{
    SESSION_COOKIE_NAME, create_session_layer, memory_session_layer, postgres_session_layer,
};
