//! HTTP route handlers.
//!
//! The only application route is `/`, answered for any method. Everything
//! else falls through to axum's default 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod index;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_INDEX;
use crate::middleware::request_id_layer;

/// Creates the Axum router with the index route and its cache header.
pub fn create_router() -> Router {
    // route_layer so unmatched paths fall through to the 404 without the header
    let index_routes = Router::new().route("/", any(index::index)).route_layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_INDEX),
        ),
    );

    Router::new()
        .merge(index_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
