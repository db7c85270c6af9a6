use serde::{Deserialize, Serialize};

use super::column::Column;

/// Request payload for `POST /api/db/{db}/tables`.
///
/// Table creation is server-interpreted from this structured payload; no SQL
/// text is involved. An empty column list is passed through for the gateway
/// to reject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTableRequest {
    pub table_name: String,
    pub columns: Vec<Column>,
}
