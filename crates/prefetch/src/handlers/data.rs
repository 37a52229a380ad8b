//! Navigation probes.
//!
//! In-app navigation asks for a page's props as JSON instead of the full
//! HTML. The guarded loaders answer these with empty props, leaving the
//! data to the hooks of the already running page.

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};

use super::AppError;
use crate::{
    ssr::{LoaderContext, PageLoader, ServerSideProps},
    state::AppState,
};

/// GET /_data/posts - props of the post list page.
pub async fn posts_props(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<ServerSideProps>, AppError> {
    let ctx = LoaderContext::new(uri.path());
    Ok(Json(state.posts_loader.load(&ctx).await?))
}

/// GET /_data/posts/{id} - props of a post detail page.
pub async fn post_props(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Json<ServerSideProps>, AppError> {
    let ctx = LoaderContext::new(uri.path()).with_param("id", id);
    Ok(Json(state.post_loader.load(&ctx).await?))
}
