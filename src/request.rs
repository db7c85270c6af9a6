//! Request Builder: deterministic translation of structured intent into SQL
//! text with an ordered parameter list, plus the JSON payloads for the
//! non-SQL endpoints.
//!
//! Values are always bound through `?` placeholders. Table and column
//! identifiers are copied verbatim into SQL text — placeholders cannot bind
//! identifiers — so the identifier path is NOT injection-safe. Callers own
//! the responsibility of passing trusted identifiers.

use serde_json::Value as JsonValue;

use crate::models::{Column, CreateTableRequest, InsertRowsRequest, QueryRequest, Row};

/// Build the structured payload for table creation. An empty column list is
/// passed through for the gateway to reject; this layer does not pre-validate.
pub(crate) fn create_table_request(table: &str, columns: &[Column]) -> CreateTableRequest {
    CreateTableRequest {
        table_name: table.to_string(),
        columns: columns.to_vec(),
    }
}

/// Build the structured payload for row insertion. An empty row list yields
/// a request expected to affect zero rows.
pub(crate) fn insert_rows_request(rows: &[Row]) -> InsertRowsRequest {
    InsertRowsRequest {
        rows: rows.to_vec(),
    }
}

/// Turn equality filters into query-parameter pairs, one per filter. Values
/// are compared by exact equality server-side; encoding beyond standard
/// query-string escaping is not applied.
pub(crate) fn select_params(filters: &Row) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(column, value)| (column.clone(), value.clone()))
        .collect()
}

/// Build the raw-query payload. SQL text and positional parameters pass
/// through unchanged; `params` is omitted from the payload when empty.
pub(crate) fn query_request(sql: &str, params: Vec<JsonValue>) -> QueryRequest {
    QueryRequest {
        sql: sql.to_string(),
        params: (!params.is_empty()).then_some(params),
    }
}

/// Build `UPDATE <table> SET c1 = ?, ... [WHERE cN = ? AND ...]` with the
/// parameter list in SET-then-WHERE order, matching the placeholder order
/// exactly.
///
/// An empty `where_conditions` omits the WHERE clause entirely: the update
/// then affects EVERY row in the table. This is reproduced deliberately;
/// callers must guard against it themselves.
pub(crate) fn build_update(
    table: &str,
    set_values: &Row,
    where_conditions: &Row,
) -> (String, Vec<JsonValue>) {
    let mut params = Vec::with_capacity(set_values.len() + where_conditions.len());

    let set_clause = clause(set_values, ", ", &mut params);
    let mut sql = format!("UPDATE {} SET {}", table, set_clause);
    append_where(&mut sql, where_conditions, &mut params);

    (sql, params)
}

/// Build `DELETE FROM <table> [WHERE ...]` with the same WHERE-omission rule
/// (and the same affects-every-row hazard) as [`build_update`].
pub(crate) fn build_delete(table: &str, where_conditions: &Row) -> (String, Vec<JsonValue>) {
    let mut params = Vec::with_capacity(where_conditions.len());

    let mut sql = format!("DELETE FROM {}", table);
    append_where(&mut sql, where_conditions, &mut params);

    (sql, params)
}

/// Join `<col> = ?` fragments with `sep`, pushing each value onto `params`
/// in the same iteration so clause order always matches parameter order.
fn clause(pairs: &Row, sep: &str, params: &mut Vec<JsonValue>) -> String {
    let fragments: Vec<String> = pairs
        .iter()
        .map(|(column, value)| {
            params.push(JsonValue::String(value.clone()));
            format!("{} = ?", column)
        })
        .collect();
    fragments.join(sep)
}

fn append_where(sql: &mut String, where_conditions: &Row, params: &mut Vec<JsonValue>) {
    if !where_conditions.is_empty() {
        let where_clause = clause(where_conditions, " AND ", params);
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_update_placeholder_count_matches_param_count() {
        let set_values = row(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let where_conditions = row(&[("x", "7"), ("y", "8")]);

        let (sql, params) = build_update("t", &set_values, &where_conditions);

        assert_eq!(sql.matches('?').count(), 5);
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_update_params_in_set_then_where_order() {
        let set_values = row(&[("status", "inactive"), ("updated_at", "now")]);
        let where_conditions = row(&[("id", "42")]);

        let (sql, params) = build_update("users", &set_values, &where_conditions);

        assert_eq!(
            sql,
            "UPDATE users SET status = ?, updated_at = ? WHERE id = ?"
        );
        assert_eq!(params, vec![json!("inactive"), json!("now"), json!("42")]);
    }

    #[test]
    fn test_update_empty_where_omits_clause() {
        // The affects-every-row default, reproduced exactly and unguarded.
        let set_values = row(&[("status", "0")]);

        let (sql, params) = build_update("t", &set_values, &Row::new());

        assert_eq!(sql, "UPDATE t SET status = ?");
        assert_eq!(params, vec![json!("0")]);
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_delete_with_conditions() {
        let where_conditions = row(&[("status", "deleted"), ("tenant", "acme")]);

        let (sql, params) = build_delete("users", &where_conditions);

        assert_eq!(sql, "DELETE FROM users WHERE status = ? AND tenant = ?");
        assert_eq!(params, vec![json!("deleted"), json!("acme")]);
    }

    #[test]
    fn test_delete_empty_where_omits_clause() {
        let (sql, params) = build_delete("users", &Row::new());

        assert_eq!(sql, "DELETE FROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_presence_iff_conditions_nonempty() {
        for n in 0..4usize {
            let conditions: Row = (0..n)
                .map(|i| (format!("c{}", i), i.to_string()))
                .collect();
            let (sql, params) = build_delete("t", &conditions);

            assert_eq!(sql.contains("WHERE"), n > 0, "n = {}: {}", n, sql);
            assert_eq!(params.len(), n);
            assert_eq!(sql.matches('?').count(), n);
        }
    }

    #[test]
    fn test_query_request_passes_sql_through_verbatim() {
        let sql = "SELECT * FROM users WHERE created_at > ? AND status = ?";
        let request = query_request(sql, vec![json!("2023-01-01"), json!("active")]);

        assert_eq!(request.sql, sql);
        assert_eq!(request.params.unwrap().len(), 2);
    }

    #[test]
    fn test_query_request_empty_params_become_none() {
        let request = query_request("SELECT 1", vec![]);

        assert!(request.params.is_none());
    }

    #[test]
    fn test_select_params_one_pair_per_filter() {
        let filters = row(&[("name", "Alice"), ("status", "active")]);

        let params = select_params(&filters);

        assert_eq!(params.len(), 2);
        assert!(params.contains(&("name".to_string(), "Alice".to_string())));
        assert!(params.contains(&("status".to_string(), "active".to_string())));
    }

    #[test]
    fn test_insert_request_permits_empty_rows() {
        let request = insert_rows_request(&[]);

        assert!(request.rows.is_empty());
    }

    #[test]
    fn test_create_table_request_preserves_column_order() {
        let columns = vec![
            Column::new("id", "INTEGER").primary_key(),
            Column::new("name", "TEXT").not_null(),
        ];
        let request = create_table_request("users", &columns);

        assert_eq!(request.table_name, "users");
        assert_eq!(request.columns[0].name, "id");
        assert_eq!(request.columns[1].name, "name");
    }
}
