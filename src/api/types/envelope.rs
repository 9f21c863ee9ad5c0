use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};

/// Pagination envelope returned by the table endpoints
///
/// Every field is optional and a field with an unexpected type reads as missing,
/// so any JSON body (including `/health`) can be viewed through it.
#[allow(missing_docs)]
#[serde_as]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub page: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub count: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl ResponseEnvelope {
    /// Reads the envelope out of a raw body, falling back to an empty one
    pub fn from_body(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    /// Records in `data`, empty when absent
    pub fn records(&self) -> &[Value] {
        self.data.as_deref().unwrap_or(&[])
    }
}
