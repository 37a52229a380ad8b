//! Detection of internal navigation probes.
//!
//! When a page is reached through in-app navigation the browser asks the
//! server for the page data under [`NAVIGATION_PREFIX`] instead of the page
//! itself. Those requests should not trigger server-side data fetching.

/// Path prefix of page-data requests issued during in-app navigation.
pub const NAVIGATION_PREFIX: &str = "/_data";

/// Returns true if the request path is an internal navigation probe.
///
/// # Examples
///
/// ```
/// use prefetch_core::navigation::is_navigation_probe;
///
/// assert!(is_navigation_probe("/_data/posts/3"));
/// assert!(!is_navigation_probe("/posts/3"));
/// ```
pub fn is_navigation_probe(path: &str) -> bool {
    path.starts_with(NAVIGATION_PREFIX)
}

/// Builds the navigation-probe path for a page path.
pub fn probe_path(page_path: &str) -> String {
    format!("{NAVIGATION_PREFIX}{page_path}")
}
