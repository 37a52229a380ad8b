//! Compact JSON rendering, using the remote API's field names.

use serde::Serialize;

/// Serialize `value` on a single line. Values that fail to serialize render
/// as an empty string.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
