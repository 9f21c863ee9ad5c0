use serde::{Deserialize, Serialize};
use serde_json::Value;

/// On-disk wrapper around a single response
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// Local time the response was saved, ISO-8601 without offset
    pub timestamp: String,
    pub query_name: String,
    /// Body exactly as the server returned it
    pub response: Value,
}

impl PersistedRecord {
    /// Wraps a response stamped with the current local time
    pub fn new(query_name: &str, response: Value) -> Self {
        PersistedRecord {
            timestamp: crate::api::utils::iso_timestamp_now(),
            query_name: query_name.to_string(),
            response,
        }
    }
}
