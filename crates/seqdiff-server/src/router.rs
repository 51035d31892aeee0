use axum::extract::DefaultBodyLimit;
use axum::{routing::get, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::protocol::endpoints;

/// Build the axum router with the compare endpoint.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route(
            endpoints::COMPARE,
            get(handler::usage_handler).post(handler::compare_handler),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}
