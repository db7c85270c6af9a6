use serde::{Deserialize, Serialize};

use super::row::Row;

/// Request payload for `POST /api/db/{db}/tables/{table}/rows`.
///
/// An empty row list is a valid request affecting zero rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertRowsRequest {
    pub rows: Vec<Row>,
}
