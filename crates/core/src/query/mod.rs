//! Query cache with an explicit state machine and hydration support.
//!
//! A [`QueryClient`] stores the outcome of fetches under a [`QueryKey`].
//! On the server a fresh client is populated per request and turned into a
//! [`DehydratedState`]; the page then hydrates its own client from that
//! snapshot so hooks observe warm data without refetching.

mod client;
mod dehydrate;
mod error;
mod key;
mod state;

pub use client::{QueryClient, QueryOptions};
pub use dehydrate::{DehydratedQuery, DehydratedQueryState, DehydratedState};
pub use error::{QueryError, Result};
pub use key::QueryKey;
pub use state::{is_stale, QueryResult, QueryState, QueryStatus};
