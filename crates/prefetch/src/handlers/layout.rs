//! Pieces shared by every HTML page: template rendering, SEO tags and the
//! navbar.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Suffix appended to every page title.
const SITE_NAME: &str = "Prefetch Query with SSR";

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Title and description of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
}

impl Seo {
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }

    /// Text of the `<title>` element.
    pub fn full_title(&self) -> String {
        format!("{} | {SITE_NAME}", self.title)
    }
}

/// A navbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Posts", "/posts")];

/// Navbar entries, marking the one whose href equals `current_route`.
pub fn nav_links(current_route: &str) -> Vec<NavLink> {
    NAV_LINKS
        .iter()
        .map(|&(name, href)| NavLink {
            name,
            href,
            active: href == current_route,
        })
        .collect()
}
