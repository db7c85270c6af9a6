//! Response Mapper: converts untyped gateway JSON into the crate's data
//! model, tolerating missing or differently-typed fields without failing
//! the call. Only a body that is not JSON at all is an error, and that is
//! caught before this module runs.
//!
//! Scalar-to-text rule, applied everywhere a JSON value lands in a [`Row`]:
//! strings are taken as-is, integers/floats/booleans use their canonical
//! `to_string` form, null becomes the empty string, and nested arrays or
//! objects keep their compact JSON text.

use serde_json::Value as JsonValue;

use crate::models::{
    ColumnInfo, CreateTableResult, DatabaseInfo, DropResult, HealthResult, InsertResult,
    PruneResult, QueryResult, Row, SpawnResult,
};

/// Canonical textual form of a JSON value. See the module docs for the rule.
pub(crate) fn value_to_text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Map a JSON object to a [`Row`]. Non-objects yield an empty row.
pub(crate) fn json_to_row(value: &JsonValue) -> Row {
    let mut row = Row::new();
    if let JsonValue::Object(members) = value {
        for (key, member) in members {
            row.insert(key.clone(), value_to_text(member));
        }
    }
    row
}

/// Map a JSON array of row objects to an ordered row sequence, preserving
/// array order. Non-array input yields an empty sequence; non-object
/// elements are skipped.
pub(crate) fn json_to_rows(value: &JsonValue) -> Vec<Row> {
    let JsonValue::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(json_to_row)
        .collect()
}

/// Read a named field as text, defaulting to the empty string when absent.
fn str_field(value: &JsonValue, key: &str) -> String {
    value.get(key).map(value_to_text).unwrap_or_default()
}

/// Read a named non-negative count, defaulting to 0 when absent or not a
/// non-negative number.
fn count_field(value: &JsonValue, key: &str) -> u64 {
    value.get(key).and_then(JsonValue::as_u64).unwrap_or(0)
}

/// "1" means true, anything else false. Numeric fields pass through the
/// text rule first, so JSON `1` and `"1"` both qualify.
fn flag(text: &str) -> bool {
    text == "1"
}

pub(crate) fn parse_query_result(body: &JsonValue) -> QueryResult {
    QueryResult {
        data: body.get("data").map(json_to_rows).unwrap_or_default(),
        rows_affected: count_field(body, "rows_affected"),
        message: str_field(body, "message"),
    }
}

pub(crate) fn parse_spawn_result(body: &JsonValue) -> SpawnResult {
    SpawnResult {
        message: str_field(body, "message"),
        db_name: str_field(body, "db_name"),
        container_id: str_field(body, "container_id"),
    }
}

pub(crate) fn parse_prune_result(body: &JsonValue) -> PruneResult {
    PruneResult {
        message: str_field(body, "message"),
        db_name: str_field(body, "db_name"),
    }
}

pub(crate) fn parse_database_list(body: &JsonValue) -> Vec<DatabaseInfo> {
    let JsonValue::Array(items) = body else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| DatabaseInfo {
            name: str_field(item, "name"),
            container_id: str_field(item, "container_id"),
            status: str_field(item, "status"),
        })
        .collect()
}

pub(crate) fn parse_health_result(body: &JsonValue) -> HealthResult {
    HealthResult {
        message: str_field(body, "message"),
        status: str_field(body, "status"),
        version: str_field(body, "version"),
    }
}

/// The gateway reports table creation only through its message; the table
/// name is recovered from the first single-quoted span in it, when present.
pub(crate) fn parse_create_table_result(body: &JsonValue) -> CreateTableResult {
    let message = str_field(body, "message");
    let table_name = quoted_span(&message).unwrap_or_default().to_string();
    CreateTableResult {
        message,
        table_name,
    }
}

pub(crate) fn parse_insert_result(body: &JsonValue) -> InsertResult {
    InsertResult {
        message: str_field(body, "message"),
        rows_affected: count_field(body, "rows_affected"),
    }
}

pub(crate) fn drop_result(result: &QueryResult, table: &str) -> DropResult {
    DropResult {
        message: result.message.clone(),
        table_name: table.to_string(),
    }
}

/// Map `PRAGMA table_info` rows into column metadata. The boolean flags
/// compare the textual `notnull`/`pk` fields to the literal `"1"`.
pub(crate) fn parse_column_infos(rows: &[Row]) -> Vec<ColumnInfo> {
    rows.iter()
        .map(|row| ColumnInfo {
            cid: row
                .get("cid")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0),
            name: row.get("name").cloned().unwrap_or_default(),
            column_type: row.get("type").cloned().unwrap_or_default(),
            not_null: row.get("notnull").is_some_and(|v| flag(v)),
            default_value: row.get("dflt_value").cloned().unwrap_or_default(),
            primary_key: row.get("pk").is_some_and(|v| flag(v)),
        })
        .collect()
}

fn quoted_span(message: &str) -> Option<&str> {
    let start = message.find('\'')?;
    let rest = &message[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}
