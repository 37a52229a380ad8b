//! Serializable snapshot of a query cache.
//!
//! The wire shape is `{"queries": [{"queryKey", "queryHash", "state":
//! {"data", "dataUpdatedAt", "status"}}]}` with `dataUpdatedAt` in epoch
//! milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{QueryKey, QueryStatus};

/// Dehydrated form of a query cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedState {
    #[serde(default)]
    pub queries: Vec<DehydratedQuery>,
}

/// A single dehydrated query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQuery {
    pub query_key: QueryKey,
    pub query_hash: String,
    pub state: DehydratedQueryState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedQueryState {
    pub data: Value,
    pub data_updated_at: i64,
    pub status: QueryStatus,
}

impl DehydratedQuery {
    /// Builds a dehydrated success entry for `key`.
    pub fn success(key: QueryKey, data: Value, updated_at: DateTime<Utc>) -> Self {
        Self {
            query_hash: key.query_hash(),
            query_key: key,
            state: DehydratedQueryState {
                data,
                data_updated_at: updated_at.timestamp_millis(),
                status: QueryStatus::Success,
            },
        }
    }

    /// Returns the data timestamp, if it is representable.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.state.data_updated_at)
    }
}

impl DehydratedState {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Finds the dehydrated query stored under `key`.
    pub fn get(&self, key: &QueryKey) -> Option<&DehydratedQuery> {
        self.queries.iter().find(|q| &q.query_key == key)
    }
}
