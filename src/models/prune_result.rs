use serde::{Deserialize, Serialize};

/// Result of pruning (removing) a database instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneResult {
    #[serde(default)]
    pub message: String,

    /// Name of the pruned database
    #[serde(default)]
    pub db_name: String,
}
