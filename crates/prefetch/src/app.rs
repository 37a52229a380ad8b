use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        data::{post_props, posts_props},
        health::livez,
        pages::{home, not_found, post_page, posts_page, tables},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/", get(home))
        .route("/tables", get(tables))
        .route("/posts", get(posts_page))
        .route("/posts/{id}", get(post_page))
        // Navigation probes, answered with page props as JSON. Not nested:
        // the loaders must see the full request path.
        .route("/_data/posts", get(posts_props))
        .route("/_data/posts/{id}", get(post_props))
        .route("/livez", get(livez))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
