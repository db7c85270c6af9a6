use serde::{Deserialize, Serialize};

use super::row::Row;

/// Result of a SQL query or a row mutation.
///
/// Built by the response mapper with explicit defaults: a missing `data`
/// field yields an empty row set, a missing `rows_affected` yields 0 (never
/// an error), a missing `message` yields an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Result rows in server order, possibly empty
    #[serde(default)]
    pub data: Vec<Row>,

    /// Number of rows affected by a mutation (0 when absent)
    #[serde(default)]
    pub rows_affected: u64,

    /// Optional human-readable message from the gateway
    #[serde(default)]
    pub message: String,
}
