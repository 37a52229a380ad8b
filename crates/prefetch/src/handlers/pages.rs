//! HTML pages.
//!
//! Data-backed pages run their guarded loader, hydrate a fresh query client
//! from the resulting props and read their data through the query hooks, so
//! a page rendered from prefetched props never fetches again.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use prefetch_core::{
    pagination::{pagination_window, PageLink, MAX_POST_ID},
    posts::{use_post, use_posts, Post},
    query::QueryClient,
};

use super::{
    error::error_page,
    layout::{nav_links, HtmlTemplate, NavLink, Seo},
    AppError,
};
use crate::{
    ssr::{LoaderContext, PageLoader, PageProps, ServerSideProps},
    state::AppState,
};

const HOME_SEO: Seo = Seo::new(
    "Home Page",
    "This is the home page of the Prefetch Query with SSR demo",
);
const TABLES_SEO: Seo = Seo::new(
    "Tables Page",
    "This is the tables page of the Prefetch Query with SSR demo",
);
const POSTS_SEO: Seo = Seo::new(
    "Posts Page",
    "This is the posts page of the Prefetch Query with SSR demo",
);
const POST_SEO: Seo = Seo::new(
    "Post Page",
    "This is the post page of the Prefetch Query with SSR demo",
);

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    seo: Seo,
    nav: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "tables.html")]
struct TablesTemplate {
    seo: Seo,
    nav: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "posts.html")]
struct PostsTemplate {
    seo: Seo,
    nav: Vec<NavLink>,
    loading: bool,
    posts: Vec<Post>,
    props_json: String,
}

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate {
    seo: Seo,
    nav: Vec<NavLink>,
    id: u64,
    loading: bool,
    post: Option<Post>,
    pagination: Vec<PageLink>,
    props_json: String,
}

/// Handler for the home page (GET /).
pub async fn home() -> impl IntoResponse {
    HtmlTemplate(HomeTemplate {
        seo: HOME_SEO,
        nav: nav_links("/"),
    })
}

/// Handler for the placeholder tables page (GET /tables).
pub async fn tables() -> impl IntoResponse {
    HtmlTemplate(TablesTemplate {
        seo: TABLES_SEO,
        nav: nav_links("/tables"),
    })
}

/// Handler for the post list page (GET /posts).
pub async fn posts_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let ctx = LoaderContext::new(uri.path());
    let props = match state.posts_loader.load(&ctx).await? {
        ServerSideProps::Props(props) => props,
        ServerSideProps::NotFound => return Ok(not_found_page()),
    };

    let client = hydrated_client(&state, &props).await;
    let result = use_posts(&client, state.api.as_ref()).await;

    let page = PostsTemplate {
        seo: POSTS_SEO,
        nav: nav_links("/posts"),
        loading: result.is_loading(),
        posts: result.into_data().unwrap_or_default(),
        props_json: props.to_script_json()?,
    };
    Ok(HtmlTemplate(page).into_response())
}

/// Handler for the post detail page (GET /posts/{id}).
pub async fn post_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Response, AppError> {
    let ctx = LoaderContext::new(uri.path()).with_param("id", id.as_str());
    let props = match state.post_loader.load(&ctx).await? {
        ServerSideProps::Props(props) => props,
        ServerSideProps::NotFound => return Ok(not_found_page()),
    };
    let Ok(id) = id.parse::<u64>() else {
        return Ok(not_found_page());
    };

    let client = hydrated_client(&state, &props).await;
    let result = use_post(&client, state.api.as_ref(), id).await;

    let page = PostTemplate {
        seo: POST_SEO,
        nav: nav_links(uri.path()),
        id,
        loading: result.is_loading(),
        post: result.into_data(),
        pagination: pagination_window(id, MAX_POST_ID),
        props_json: props.to_script_json()?,
    };
    Ok(HtmlTemplate(page).into_response())
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    not_found_page()
}

fn not_found_page() -> Response {
    error_page(StatusCode::NOT_FOUND)
}

async fn hydrated_client(state: &AppState, props: &PageProps) -> QueryClient {
    props
        .hydrate_client(QueryClient::new(state.query_options))
        .await
}
