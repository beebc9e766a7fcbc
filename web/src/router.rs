use crate::controller::user_controller;
use crate::middleware::request_log::log_request;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue},
    middleware::from_fn,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

const V1_BASE_ENDPOINT: &str = "/v1";
const APPLICATION_JSON: &str = "application/json";

/// Builds the complete route table. Called once at startup.
pub fn define_routes() -> Router {
    Router::new()
        .nest(V1_BASE_ENDPOINT, v1_routes())
        .layer(from_fn(log_request))
}

// Every response under /v1, including extractor rejections and handler
// errors, is labeled as JSON.
fn v1_routes() -> Router {
    Router::new()
        .merge(user_routes())
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        ))
}

fn user_routes() -> Router {
    Router::new().route(
        "/users/{id}",
        get(user_controller::find_by_display_name),
    )
}
