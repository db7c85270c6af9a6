use serde::{Deserialize, Serialize};

/// Result of a table drop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropResult {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub table_name: String,
}
