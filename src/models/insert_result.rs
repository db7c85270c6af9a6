use serde::{Deserialize, Serialize};

/// Result of a row insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
    #[serde(default)]
    pub message: String,

    /// Number of rows inserted (0 when the gateway omits the field)
    #[serde(default)]
    pub rows_affected: u64,
}
