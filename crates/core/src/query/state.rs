use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Coarse status of a query, as exposed in dehydrated snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Lifecycle of a single cached query.
///
/// `Idle -> Loading -> Success | Error`. A refetch of a successful query
/// keeps the previous `Success` until the new outcome is stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState<T> {
    /// Nothing has been requested for this key yet.
    #[default]
    Idle,
    /// A fetch is in flight and no data is available.
    Loading,
    Success {
        data: T,
        updated_at: DateTime<Utc>,
    },
    Error {
        message: String,
        updated_at: DateTime<Utc>,
    },
}

impl<T> QueryState<T> {
    pub fn status(&self) -> QueryStatus {
        match self {
            QueryState::Idle => QueryStatus::Idle,
            QueryState::Loading => QueryStatus::Loading,
            QueryState::Success { .. } => QueryStatus::Success,
            QueryState::Error { .. } => QueryStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Returns the time the data was last stored, if any.
    pub fn data_updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            QueryState::Success { updated_at, .. } => Some(*updated_at),
            _ => None,
        }
    }

    /// Maps the data of a successful state, keeping the other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Idle => QueryState::Idle,
            QueryState::Loading => QueryState::Loading,
            QueryState::Success { data, updated_at } => QueryState::Success {
                data: f(data),
                updated_at,
            },
            QueryState::Error {
                message,
                updated_at,
            } => QueryState::Error {
                message,
                updated_at,
            },
        }
    }
}

/// Returns true if data stored at `updated_at` is stale at `now`.
///
/// A zero `stale_time` makes data stale immediately.
pub fn is_stale(updated_at: DateTime<Utc>, stale_time: Duration, now: DateTime<Utc>) -> bool {
    let stale_time = TimeDelta::from_std(stale_time).unwrap_or(TimeDelta::MAX);
    now.signed_duration_since(updated_at) >= stale_time
}

/// What a query hook reports to the page rendering it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub state: QueryState<T>,
    /// True when the data should be refetched at the next opportunity.
    pub is_stale: bool,
}

impl<T> QueryResult<T> {
    pub fn loading() -> Self {
        Self {
            state: QueryState::Loading,
            is_stale: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, QueryState::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, QueryState::Error { .. })
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn into_data(self) -> Option<T> {
        match self.state {
            QueryState::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            QueryState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}
