use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::layout::{nav_links, HtmlTemplate, NavLink, Seo};

/// Error page, used for 404 and 500 responses.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub seo: Seo,
    pub nav: Vec<NavLink>,
    pub status: u16,
    pub message: &'static str,
}

/// Renders the error page with the given status.
pub fn error_page(status: StatusCode) -> Response {
    let (seo, message) = if status == StatusCode::NOT_FOUND {
        (
            Seo::new("Not Found", "The requested page does not exist"),
            "This page could not be found.",
        )
    } else {
        (
            Seo::new("Server Error", "The page failed to load"),
            "An unexpected error has occurred.",
        )
    };

    let page = ErrorTemplate {
        seo,
        nav: nav_links(""),
        status: status.as_u16(),
        message,
    };
    (status, HtmlTemplate(page)).into_response()
}

/// Rendered as the 500 error page.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        error_page(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
