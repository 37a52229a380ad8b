//! In-memory query client with LRU eviction.
//!
//! Thread-safe store using `Arc<RwLock<LruCache>>`. Fetchers run without
//! holding the lock, so a slow remote call never blocks readers.

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::posts;

use super::{
    is_stale, DehydratedQuery, DehydratedState, QueryError, QueryKey, QueryResult, QueryState,
    QueryStatus, Result,
};

/// Default upper bound on cached queries.
const DEFAULT_MAX_ENTRIES: usize = 1_000;

/// Options shared by every query of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// How long fetched data counts as fresh.
    pub stale_time: Duration,
    /// Maximum number of cached queries before LRU eviction.
    pub max_entries: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

#[derive(Debug, Clone)]
struct QueryEntry {
    state: QueryState<Value>,
    invalidated: bool,
}

impl QueryEntry {
    fn new(state: QueryState<Value>) -> Self {
        Self {
            state,
            invalidated: false,
        }
    }
}

/// Cache of query results keyed by [`QueryKey`].
///
/// Cloning is cheap and clones share the same store.
#[derive(Debug, Clone)]
pub struct QueryClient {
    store: Arc<RwLock<LruCache<QueryKey, QueryEntry>>>,
    options: QueryOptions,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(QueryOptions::default())
    }
}

impl QueryClient {
    /// Creates an empty client. A `max_entries` of 0 is treated as 1.
    pub fn new(options: QueryOptions) -> Self {
        let capacity = NonZeroUsize::new(options.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            options,
        }
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Returns the data for `key`, fetching it when missing or stale.
    ///
    /// On failure the entry is left in the `Error` state and the error is
    /// returned to the caller.
    pub async fn fetch_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = posts::Result<T>>,
    {
        if let Some(data) = self.fresh_data::<T>(&key).await {
            return Ok(data);
        }
        self.run_fetch(key, fetcher).await
    }

    /// Hook-style access: reports cached data immediately, fetching only when
    /// there is no usable data for `key`.
    pub async fn use_query<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = posts::Result<T>>,
    {
        let has_usable_data = {
            let mut store = self.store.write().await;
            store
                .get(&key)
                .is_some_and(|entry| entry.state.data().is_some() && !entry.invalidated)
        };

        if !has_usable_data {
            // The outcome is recorded in the store either way.
            let _ = self.run_fetch(key.clone(), fetcher).await;
        }

        self.observe(&key).await
    }

    /// Non-fetching snapshot of `key`, as a freshly mounted hook sees it.
    ///
    /// Keys with no entry report `Loading`: the hook is about to fetch.
    pub async fn observe<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryResult<T> {
        let entry = {
            let mut store = self.store.write().await;
            store.get(key).cloned()
        };

        let Some(entry) = entry else {
            return QueryResult::loading();
        };

        let is_stale = entry.invalidated
            || entry
                .state
                .data_updated_at()
                .is_none_or(|at| is_stale(at, self.options.stale_time, Utc::now()));

        let state = match entry.state {
            QueryState::Idle => QueryState::Loading,
            QueryState::Success { data, updated_at } => match serde_json::from_value(data) {
                Ok(data) => QueryState::Success { data, updated_at },
                Err(e) => QueryState::Error {
                    message: QueryError::Serialization(e.to_string()).to_string(),
                    updated_at,
                },
            },
            QueryState::Loading => QueryState::Loading,
            QueryState::Error {
                message,
                updated_at,
            } => QueryState::Error {
                message,
                updated_at,
            },
        };

        QueryResult { state, is_stale }
    }

    /// Returns the cached data for `key` regardless of staleness.
    pub async fn get_query_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let mut store = self.store.write().await;
        let data = store.get(key)?.state.data()?.clone();
        serde_json::from_value(data).ok()
    }

    /// Returns the raw state for `key`; unknown keys are `Idle`.
    pub async fn get_query_state(&self, key: &QueryKey) -> QueryState<Value> {
        let mut store = self.store.write().await;
        store
            .get(key)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    /// Stores `data` under `key` as a fresh success.
    pub async fn set_query_data<T: Serialize>(&self, key: QueryKey, data: &T) -> Result<()> {
        let data =
            serde_json::to_value(data).map_err(|e| QueryError::Serialization(e.to_string()))?;
        let mut store = self.store.write().await;
        store.put(
            key,
            QueryEntry::new(QueryState::Success {
                data,
                updated_at: Utc::now(),
            }),
        );
        Ok(())
    }

    /// Marks `key` stale so the next fetch or hook refetches it.
    ///
    /// Returns false if the key was not cached.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        let mut store = self.store.write().await;
        match store.get_mut(key) {
            Some(entry) => {
                entry.invalidated = true;
                true
            }
            None => false,
        }
    }

    /// Drops `key` from the cache. Returns false if it was not cached.
    pub async fn remove(&self, key: &QueryKey) -> bool {
        self.store.write().await.pop(key).is_some()
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Serializes every successful query into a [`DehydratedState`].
    ///
    /// Loading and failed queries are left out. Queries are ordered by hash.
    pub async fn dehydrate(&self) -> DehydratedState {
        let store = self.store.read().await;
        let mut queries: Vec<DehydratedQuery> = store
            .iter()
            .filter_map(|(key, entry)| match &entry.state {
                QueryState::Success { data, updated_at } => Some(DehydratedQuery::success(
                    key.clone(),
                    data.clone(),
                    *updated_at,
                )),
                _ => None,
            })
            .collect();
        queries.sort_by(|a, b| a.query_hash.cmp(&b.query_hash));

        DehydratedState { queries }
    }

    /// Restores queries from a dehydrated snapshot.
    ///
    /// A query is skipped when the cache already holds data at least as new.
    /// Returns the number of queries restored.
    pub async fn hydrate(&self, state: DehydratedState) -> usize {
        let mut store = self.store.write().await;
        let mut restored = 0;

        for query in state.queries {
            if query.state.status != QueryStatus::Success {
                continue;
            }
            let Some(updated_at) = query.updated_at() else {
                continue;
            };

            let newer_cached = store
                .peek(&query.query_key)
                .and_then(|entry| entry.state.data_updated_at())
                .is_some_and(|cached_at| cached_at >= updated_at);
            if newer_cached {
                continue;
            }

            store.put(
                query.query_key,
                QueryEntry::new(QueryState::Success {
                    data: query.state.data,
                    updated_at,
                }),
            );
            restored += 1;
        }

        restored
    }

    async fn fresh_data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let mut store = self.store.write().await;
        let entry = store.get(key)?;
        if entry.invalidated {
            return None;
        }
        let QueryState::Success { data, updated_at } = &entry.state else {
            return None;
        };
        if is_stale(*updated_at, self.options.stale_time, Utc::now()) {
            return None;
        }
        serde_json::from_value(data.clone()).ok()
    }

    async fn run_fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = posts::Result<T>>,
    {
        {
            let mut store = self.store.write().await;
            match store.get_mut(&key) {
                // A refetch keeps the previous data visible.
                Some(entry) if entry.state.data().is_some() => {}
                Some(entry) => entry.state = QueryState::Loading,
                None => {
                    store.put(key.clone(), QueryEntry::new(QueryState::Loading));
                }
            }
        }

        let outcome = fetcher().await.map_err(QueryError::from).and_then(|data| {
            let value =
                serde_json::to_value(&data).map_err(|e| QueryError::Serialization(e.to_string()))?;
            Ok((data, value))
        });

        let mut store = self.store.write().await;
        let updated_at = Utc::now();
        match outcome {
            Ok((data, value)) => {
                store.put(
                    key,
                    QueryEntry::new(QueryState::Success {
                        data: value,
                        updated_at,
                    }),
                );
                Ok(data)
            }
            Err(e) => {
                store.put(
                    key,
                    QueryEntry::new(QueryState::Error {
                        message: e.to_string(),
                        updated_at,
                    }),
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::posts::{ApiError, Post};

    fn post(id: u64) -> Post {
        Post::new(id, format!("title {id}"), format!("body {id}"))
    }

    fn fresh_options() -> QueryOptions {
        QueryOptions {
            stale_time: Duration::from_secs(3600),
            ..QueryOptions::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_query_stores_success() {
        let client = QueryClient::default();

        let fetched = client
            .fetch_query(QueryKey::Post(1), || async { Ok(post(1)) })
            .await
            .unwrap();

        assert_eq!(fetched, post(1));
        assert_eq!(
            client.get_query_state(&QueryKey::Post(1)).await.status(),
            QueryStatus::Success
        );
        assert_eq!(
            client.get_query_data::<Post>(&QueryKey::Post(1)).await,
            Some(post(1))
        );
    }

    #[tokio::test]
    async fn test_fetch_query_transitions_through_loading() {
        let client = QueryClient::default();
        assert_eq!(
            client.get_query_state(&QueryKey::Posts).await,
            QueryState::Idle
        );

        let observer = client.clone();
        client
            .fetch_query(QueryKey::Posts, || async move {
                let status = observer.get_query_state(&QueryKey::Posts).await.status();
                assert_eq!(status, QueryStatus::Loading);
                Ok(vec![post(1)])
            })
            .await
            .unwrap();

        assert_eq!(
            client.get_query_state(&QueryKey::Posts).await.status(),
            QueryStatus::Success
        );
    }

    #[tokio::test]
    async fn test_fetch_query_failure_leaves_no_data() {
        let client = QueryClient::default();

        let result = client
            .fetch_query::<Post, _, _>(QueryKey::Post(999), || async {
                Err(ApiError::NotFound {
                    resource: "post 999".to_string(),
                })
            })
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(client.get_query_data::<Post>(&QueryKey::Post(999)).await, None);
        assert_eq!(
            client.get_query_state(&QueryKey::Post(999)).await.status(),
            QueryStatus::Error
        );
    }

    #[tokio::test]
    async fn test_fresh_data_is_not_refetched() {
        let client = QueryClient::new(fresh_options());
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        for _ in 0..3 {
            client
                .fetch_query(QueryKey::Post(2), || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(post(2))
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_data_is_refetched() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        for _ in 0..2 {
            client
                .fetch_query(QueryKey::Post(2), || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(post(2))
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let client = QueryClient::new(fresh_options());
        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let fetch = || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(post(4))
        };

        client.fetch_query(QueryKey::Post(4), fetch).await.unwrap();
        assert!(client.invalidate(&QueryKey::Post(4)).await);
        assert!(client.observe::<Post>(&QueryKey::Post(4)).await.is_stale);

        client.fetch_query(QueryKey::Post(4), fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!client.invalidate(&QueryKey::Post(5)).await);
    }

    #[tokio::test]
    async fn test_refetch_keeps_previous_data_visible() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Post(1), &post(1)).await.unwrap();

        let observer = client.clone();
        client
            .fetch_query(QueryKey::Post(1), || async move {
                let state = observer.get_query_state(&QueryKey::Post(1)).await;
                assert_eq!(state.status(), QueryStatus::Success);
                Ok(post(1))
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_observe_missing_key_reports_loading() {
        let client = QueryClient::default();
        let result = client.observe::<Vec<Post>>(&QueryKey::Posts).await;

        assert!(result.is_loading());
        assert_eq!(result.data(), None);
    }

    #[tokio::test]
    async fn test_observe_wrong_type_reports_error() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Posts, &"not a list").await.unwrap();

        let result = client.observe::<Vec<Post>>(&QueryKey::Posts).await;
        assert!(result.is_error());
        assert!(result.error().unwrap().starts_with("Serialization error"));
    }

    #[tokio::test]
    async fn test_use_query_fetches_when_empty() {
        let client = QueryClient::default();
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let result = client
            .use_query(QueryKey::Posts, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec![post(1), post(2)])
            })
            .await;

        assert!(result.is_success());
        assert_eq!(result.data().map(Vec::len), Some(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_use_query_reports_error() {
        let client = QueryClient::default();

        let result = client
            .use_query::<Vec<Post>, _, _>(QueryKey::Posts, || async {
                Err(ApiError::Request("offline".to_string()))
            })
            .await;

        assert!(result.is_error());
        assert_eq!(
            result.error(),
            Some("Fetch failed: Request failed: offline")
        );
    }

    #[tokio::test]
    async fn test_use_query_serves_cached_data_without_fetching() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Post(8), &post(8)).await.unwrap();
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        let result = client
            .use_query(QueryKey::Post(8), || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(post(8))
            })
            .await;

        assert!(!result.is_loading());
        assert_eq!(result.into_data(), Some(post(8)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dehydrate_skips_failed_queries() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Post(1), &post(1)).await.unwrap();
        let _ = client
            .fetch_query::<Post, _, _>(QueryKey::Post(2), || async {
                Err(ApiError::Request("down".to_string()))
            })
            .await;

        let state = client.dehydrate().await;
        assert_eq!(state.len(), 1);
        assert!(state.get(&QueryKey::Post(1)).is_some());
    }

    #[tokio::test]
    async fn test_dehydrate_is_ordered_by_hash() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Posts, &vec![post(1)]).await.unwrap();
        client.set_query_data(QueryKey::Post(1), &post(1)).await.unwrap();

        let hashes: Vec<String> = client
            .dehydrate()
            .await
            .queries
            .into_iter()
            .map(|q| q.query_hash)
            .collect();
        assert_eq!(hashes, vec![r#"["post",1]"#, r#"["posts"]"#]);
    }

    #[tokio::test]
    async fn test_hydrated_client_serves_data_without_fetching() {
        let server = QueryClient::default();
        server
            .fetch_query(QueryKey::Posts, || async { Ok(vec![post(1), post(2)]) })
            .await
            .unwrap();
        let snapshot = server.dehydrate().await;

        // Transport through JSON as a page would.
        let json = serde_json::to_string(&snapshot).unwrap();
        let snapshot: DehydratedState = serde_json::from_str(&json).unwrap();

        let browser = QueryClient::default();
        assert_eq!(browser.hydrate(snapshot).await, 1);

        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let result = browser
            .use_query(QueryKey::Posts, || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Vec::<Post>::new())
            })
            .await;

        assert!(!result.is_loading());
        assert_eq!(result.into_data(), Some(vec![post(1), post(2)]));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hydrate_does_not_overwrite_newer_data() {
        let older = QueryClient::default();
        older.set_query_data(QueryKey::Post(1), &post(1)).await.unwrap();
        let snapshot = older.dehydrate().await;

        tokio::time::sleep(Duration::from_millis(5)).await;

        let client = QueryClient::default();
        let newer = Post::new(1, "edited", "edited");
        client.set_query_data(QueryKey::Post(1), &newer).await.unwrap();

        assert_eq!(client.hydrate(snapshot).await, 0);
        assert_eq!(
            client.get_query_data::<Post>(&QueryKey::Post(1)).await,
            Some(newer)
        );
    }

    #[tokio::test]
    async fn test_lru_evicts_oldest_query() {
        let client = QueryClient::new(QueryOptions {
            max_entries: 2,
            ..QueryOptions::default()
        });

        for id in 1..=3 {
            client.set_query_data(QueryKey::Post(id), &post(id)).await.unwrap();
        }

        assert_eq!(client.len().await, 2);
        assert_eq!(client.get_query_data::<Post>(&QueryKey::Post(1)).await, None);
        assert!(client.get_query_data::<Post>(&QueryKey::Post(3)).await.is_some());
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let client = QueryClient::default();
        client.set_query_data(QueryKey::Post(1), &post(1)).await.unwrap();
        client.set_query_data(QueryKey::Post(2), &post(2)).await.unwrap();

        assert!(client.remove(&QueryKey::Post(1)).await);
        assert!(!client.remove(&QueryKey::Post(1)).await);
        assert_eq!(client.len().await, 1);

        client.clear().await;
        assert!(client.is_empty().await);
    }
}
