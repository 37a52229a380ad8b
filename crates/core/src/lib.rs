//! Functional core for prefetch.
//!
//! This crate provides:
//! - The `Post` record and the `PostsApi` seam to the remote source
//! - A query client with an explicit state machine and LRU-bounded store
//! - Dehydration/hydration of the query cache for server-to-page transport
//! - Query hooks binding the posts API to cache keys
//! - Pure helpers for pagination and navigation-probe detection
//!
//! # Example
//!
//! ```
//! use prefetch_core::pagination::pagination_window;
//!
//! let ids: Vec<u64> = pagination_window(1, 100).iter().map(|l| l.id).collect();
//! assert_eq!(ids, vec![1, 2, 3, 4]);
//! ```

pub mod navigation;
pub mod pagination;
pub mod posts;
pub mod query;
