use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::QueryError;

/// Identifier under which a fetch result is cached.
///
/// Serialized as a JSON array: `["posts"]` or `["post", 5]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Value>", into = "Vec<Value>")]
pub enum QueryKey {
    /// The full post list.
    Posts,
    /// A single post by id.
    Post(u64),
}

impl QueryKey {
    /// Returns the key segments.
    pub fn parts(&self) -> Vec<Value> {
        match self {
            QueryKey::Posts => vec![Value::from("posts")],
            QueryKey::Post(id) => vec![Value::from("post"), Value::from(*id)],
        }
    }

    /// Returns the stable hash string for this key (its compact JSON form).
    pub fn query_hash(&self) -> String {
        Value::Array(self.parts()).to_string()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_hash())
    }
}

impl From<QueryKey> for Vec<Value> {
    fn from(key: QueryKey) -> Self {
        key.parts()
    }
}

impl TryFrom<Vec<Value>> for QueryKey {
    type Error = QueryError;

    fn try_from(parts: Vec<Value>) -> Result<Self, Self::Error> {
        let invalid = || QueryError::InvalidKey(Value::Array(parts.clone()).to_string());

        match parts.as_slice() {
            [Value::String(name)] if name == "posts" => Ok(QueryKey::Posts),
            [Value::String(name), id] if name == "post" => {
                // Route params arrive as strings, cache keys built in code as numbers.
                let id = match id {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.parse().ok(),
                    _ => None,
                };
                id.map(QueryKey::Post).ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }
}
