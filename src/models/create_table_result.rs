use serde::{Deserialize, Serialize};

/// Result of a table creation.
///
/// The gateway reports only a message; the table name is recovered from the
/// single-quoted name inside it when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableResult {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub table_name: String,
}
