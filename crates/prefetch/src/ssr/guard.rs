//! Skips server data loading for in-app navigation probes.

use prefetch_core::navigation::is_navigation_probe;

use super::{LoaderContext, LoaderError, PageLoader, ServerSideProps};

/// A loader that answers navigation probes with empty props.
///
/// Any other request is delegated to the wrapped loader, whose result and
/// errors pass through unchanged.
#[derive(Debug, Clone)]
pub struct NavigationCsr<L> {
    inner: L,
}

#[cfg(test)]
impl<L> NavigationCsr<L> {
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

/// Wraps `loader` so navigation probes never reach it.
pub fn with_navigation_csr<L: PageLoader>(loader: L) -> NavigationCsr<L> {
    NavigationCsr { inner: loader }
}

impl<L: PageLoader> PageLoader for NavigationCsr<L> {
    async fn load(&self, ctx: &LoaderContext) -> Result<ServerSideProps, LoaderError> {
        if is_navigation_probe(&ctx.path) {
            tracing::debug!(path = %ctx.path, "navigation probe, skipping server data");
            return Ok(ServerSideProps::empty());
        }
        self.inner.load(ctx).await
    }
}
