//! Server-side data loading for pages.
//!
//! Each data-backed page has a [`PageLoader`] that fills a request-scoped
//! query client and hands its dehydrated state to the page as props.
//! Loaders are wrapped with [`with_navigation_csr`] so in-app navigation
//! probes skip the remote fetch entirely.

mod guard;
mod loader;
mod loaders;
mod props;

pub use guard::{with_navigation_csr, NavigationCsr};
pub use loader::{LoaderContext, LoaderError, PageLoader};
pub use loaders::{PostLoader, PostsLoader};
pub use props::{PageProps, ServerSideProps};
