use serde::{Deserialize, Serialize};

/// One entry from the admin database listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub container_id: String,

    /// Container status as reported by the gateway (e.g. "running")
    #[serde(default)]
    pub status: String,
}
