use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Request payload for raw SQL execution.
///
/// The SQL text passes through verbatim; `params` holds positional values
/// for `?` placeholders and is omitted from the payload when empty.
///
/// # Examples
///
/// ```rust
/// use dbforge_link::QueryRequest;
/// use serde_json::json;
///
/// let request = QueryRequest {
///     sql: "SELECT * FROM users WHERE id = ?".to_string(),
///     params: Some(vec![json!(42)]),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// SQL query string (may contain `?` placeholders)
    pub sql: String,

    /// Positional parameter values for placeholders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<JsonValue>>,
}
