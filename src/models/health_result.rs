use serde::{Deserialize, Serialize};

/// Health probe response from the gateway root endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResult {
    #[serde(default)]
    pub message: String,

    /// Health status (e.g. "healthy")
    #[serde(default)]
    pub status: String,

    /// Gateway version
    #[serde(default)]
    pub version: String,
}
