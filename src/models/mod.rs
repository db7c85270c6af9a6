//! Data models for the dbforge-link client library.
//!
//! Defines the request payloads sent to the gateway and the typed result
//! shapes mapped back from its JSON responses.

pub mod column;
pub mod column_info;
pub mod create_table_request;
pub mod create_table_result;
pub mod database_info;
pub mod drop_result;
pub mod error_detail;
pub mod health_result;
pub mod insert_result;
pub mod insert_rows_request;
pub mod prune_result;
pub mod query_request;
pub mod query_result;
pub mod row;
pub mod spawn_result;

#[cfg(test)]
mod tests;

pub use column::Column;
pub use column_info::ColumnInfo;
pub use create_table_request::CreateTableRequest;
pub use create_table_result::CreateTableResult;
pub use database_info::DatabaseInfo;
pub use drop_result::DropResult;
pub use error_detail::{ErrorDetail, ErrorEnvelope};
pub use health_result::HealthResult;
pub use insert_result::InsertResult;
pub use insert_rows_request::InsertRowsRequest;
pub use prune_result::PruneResult;
pub use query_request::QueryRequest;
pub use query_result::QueryResult;
pub use row::Row;
pub use spawn_result::SpawnResult;
