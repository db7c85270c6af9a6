use serde::{Deserialize, Serialize};

/// Result of spawning a database instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnResult {
    #[serde(default)]
    pub message: String,

    /// Name of the spawned database
    #[serde(default)]
    pub db_name: String,

    /// Identifier of the container backing the instance
    #[serde(default)]
    pub container_id: String,
}
