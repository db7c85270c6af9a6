//! Per-database data operations.
//!
//! A [`Database`] handle composes the request builder, the HTTP transport
//! and the response mapper for each logical operation. Table listing, schema
//! introspection and table drops reuse the raw-query path (system catalog /
//! `PRAGMA` queries) so their errors classify exactly like any other query.

use log::debug;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::models::{
    Column, ColumnInfo, CreateTableResult, DropResult, InsertResult, QueryResult, Row,
};
use crate::request;
use crate::response;
use crate::transport::HttpTransport;

const LIST_TABLES_SQL: &str =
    "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'";

/// Handle for data operations against one database instance.
///
/// Obtained from [`crate::DbForgeClient::database`]; holds only the database
/// name and the shared transport. `Clone` and safe to use concurrently.
///
/// Table and column names passed to these methods are interpolated verbatim
/// into SQL or endpoint paths (placeholders cannot bind identifiers); pass
/// trusted identifiers only. Values always travel as parameters.
#[derive(Debug, Clone)]
pub struct Database {
    transport: HttpTransport,
    name: String,
}

impl Database {
    pub(crate) fn new(transport: HttpTransport, name: String) -> Self {
        Self { transport, name }
    }

    /// The database name this handle operates on.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a table from structured column definitions.
    ///
    /// An empty `columns` slice is sent as-is; the gateway rejects it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dbforge_link::{Column, DbForgeClient};
    ///
    /// # async fn example() -> dbforge_link::Result<()> {
    /// let db = DbForgeClient::new()?.database("app-db");
    /// db.create_table(
    ///     "users",
    ///     &[
    ///         Column::new("id", "INTEGER").primary_key(),
    ///         Column::new("username", "TEXT").not_null().unique(),
    ///     ],
    /// )
    /// .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_table(&self, table: &str, columns: &[Column]) -> Result<CreateTableResult> {
        debug!(
            "[FORGE_DATA] Creating table '{}' in '{}' ({} columns)",
            table,
            self.name,
            columns.len()
        );
        let payload = request::create_table_request(table, columns);
        let body = self
            .transport
            .post(&format!("/api/db/{}/tables", self.name), &payload)
            .await?;
        Ok(response::parse_create_table_result(&body))
    }

    /// Insert rows into a table. An empty `rows` slice is a valid request
    /// affecting zero rows.
    pub async fn insert_rows(&self, table: &str, rows: &[Row]) -> Result<InsertResult> {
        debug!(
            "[FORGE_DATA] Inserting {} row(s) into '{}.{}'",
            rows.len(),
            self.name,
            table
        );
        let payload = request::insert_rows_request(rows);
        let body = self
            .transport
            .post(
                &format!("/api/db/{}/tables/{}/rows", self.name, table),
                &payload,
            )
            .await?;
        Ok(response::parse_insert_result(&body))
    }

    /// Select rows matching all equality `filters`. An empty filter map
    /// selects every row. A response without a `data` field yields an empty
    /// row set.
    pub async fn select_rows(&self, table: &str, filters: &Row) -> Result<Vec<Row>> {
        let query = request::select_params(filters);
        let body = self
            .transport
            .get(
                &format!("/api/db/{}/tables/{}/rows", self.name, table),
                &query,
            )
            .await?;
        Ok(body
            .get("data")
            .map(response::json_to_rows)
            .unwrap_or_default())
    }

    /// Execute raw parameterized SQL.
    ///
    /// This is the only operation where the caller controls SQL text
    /// directly; the client performs no validation of it.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example() -> dbforge_link::Result<()> {
    /// # let db = dbforge_link::DbForgeClient::new()?.database("app-db");
    /// use serde_json::json;
    ///
    /// let result = db
    ///     .execute_query(
    ///         "SELECT * FROM users WHERE created_at > ? AND status = ?",
    ///         vec![json!("2023-01-01"), json!("active")],
    ///     )
    ///     .await?;
    /// println!("{} row(s)", result.data.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute_query(&self, sql: &str, params: Vec<JsonValue>) -> Result<QueryResult> {
        let sql_preview: String = sql.chars().take(80).collect();
        debug!(
            "[FORGE_QUERY] Executing on '{}': \"{}\" ({} param(s))",
            self.name,
            sql_preview.replace('\n', " "),
            params.len()
        );
        let payload = request::query_request(sql, params);
        let body = self
            .transport
            .post(&format!("/api/db/{}/query", self.name), &payload)
            .await?;
        Ok(response::parse_query_result(&body))
    }

    /// Update columns on rows matching all equality `where_conditions`.
    ///
    /// With empty `where_conditions` the WHERE clause is omitted and EVERY
    /// row in the table is updated. No guard is applied here; callers that
    /// need one must check before calling.
    pub async fn update_rows(
        &self,
        table: &str,
        set_values: &Row,
        where_conditions: &Row,
    ) -> Result<QueryResult> {
        let (sql, params) = request::build_update(table, set_values, where_conditions);
        self.execute_query(&sql, params).await
    }

    /// Delete rows matching all equality `where_conditions`.
    ///
    /// With empty `where_conditions` the WHERE clause is omitted and EVERY
    /// row in the table is deleted. Same caller responsibility as
    /// [`Database::update_rows`].
    pub async fn delete_rows(&self, table: &str, where_conditions: &Row) -> Result<QueryResult> {
        let (sql, params) = request::build_delete(table, where_conditions);
        self.execute_query(&sql, params).await
    }

    /// List user tables via the system catalog.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let result = self.execute_query(LIST_TABLES_SQL, vec![]).await?;
        Ok(result
            .data
            .iter()
            .filter_map(|row| row.get("name").cloned())
            .collect())
    }

    /// Get column metadata for a table via `PRAGMA table_info`.
    pub async fn get_table_schema(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let result = self
            .execute_query(&format!("PRAGMA table_info({})", table), vec![])
            .await?;
        Ok(response::parse_column_infos(&result.data))
    }

    /// Drop a table if it exists.
    pub async fn drop_table(&self, table: &str) -> Result<DropResult> {
        let result = self
            .execute_query(&format!("DROP TABLE IF EXISTS {}", table), vec![])
            .await?;
        Ok(response::drop_result(&result, table))
    }
}
