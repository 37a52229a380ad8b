use serde::{Deserialize, Serialize};

/// A post record as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Creates a new post.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id: 1,
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Sets the author id.
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }
}
