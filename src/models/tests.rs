use serde_json::json;

use super::*;

// ==================== Column Tests ====================

#[test]
fn test_column_serializes_only_set_flags() {
    let col = Column::new("id", "INTEGER").primary_key();
    let value = serde_json::to_value(&col).unwrap();

    assert_eq!(value, json!({"name": "id", "type": "INTEGER", "primary_key": true}));
}

#[test]
fn test_column_full_definition() {
    let col = Column::new("created_at", "DATETIME")
        .not_null()
        .unique()
        .default_value("CURRENT_TIMESTAMP");
    let value = serde_json::to_value(&col).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "created_at",
            "type": "DATETIME",
            "not_null": true,
            "unique": true,
            "default": "CURRENT_TIMESTAMP"
        })
    );
}

#[test]
fn test_column_deserializes_with_defaults() {
    let col: Column = serde_json::from_str(r#"{"name": "email", "type": "TEXT"}"#).unwrap();

    assert_eq!(col.name, "email");
    assert_eq!(col.column_type, "TEXT");
    assert!(!col.primary_key);
    assert!(!col.not_null);
    assert!(!col.unique);
    assert!(col.default_value.is_none());
}

// ==================== Request Payload Tests ====================

#[test]
fn test_query_request_omits_empty_params() {
    let request = QueryRequest {
        sql: "SELECT 1".to_string(),
        params: None,
    };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value, json!({"sql": "SELECT 1"}));
}

#[test]
fn test_query_request_with_params() {
    let request = QueryRequest {
        sql: "SELECT * FROM users WHERE id = ?".to_string(),
        params: Some(vec![json!(42)]),
    };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({"sql": "SELECT * FROM users WHERE id = ?", "params": [42]})
    );
}

#[test]
fn test_insert_rows_request_shape() {
    let mut row = Row::new();
    row.insert("username".to_string(), "alice".to_string());
    let request = InsertRowsRequest { rows: vec![row] };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value, json!({"rows": [{"username": "alice"}]}));
}

#[test]
fn test_create_table_request_shape() {
    let request = CreateTableRequest {
        table_name: "users".to_string(),
        columns: vec![Column::new("id", "INTEGER").primary_key()],
    };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "table_name": "users",
            "columns": [{"name": "id", "type": "INTEGER", "primary_key": true}]
        })
    );
}

// ==================== Result Shape Tests ====================

#[test]
fn test_query_result_defaults_on_empty_body() {
    let result: QueryResult = serde_json::from_str("{}").unwrap();

    assert!(result.data.is_empty());
    assert_eq!(result.rows_affected, 0);
    assert_eq!(result.message, "");
}

#[test]
fn test_spawn_result_defaults_missing_fields() {
    let result: SpawnResult = serde_json::from_str(r#"{"message": "spawned"}"#).unwrap();

    assert_eq!(result.message, "spawned");
    assert_eq!(result.db_name, "");
    assert_eq!(result.container_id, "");
}

#[test]
fn test_database_info_roundtrip() {
    let info = DatabaseInfo {
        name: "orders".to_string(),
        container_id: "c0ffee".to_string(),
        status: "running".to_string(),
    };
    let parsed: DatabaseInfo =
        serde_json::from_str(&serde_json::to_string(&info).unwrap()).unwrap();

    assert_eq!(parsed, info);
}

#[test]
fn test_insert_result_missing_rows_affected_is_zero() {
    let result: InsertResult = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();

    assert_eq!(result.rows_affected, 0);
}

// ==================== Error Envelope Tests ====================

#[test]
fn test_error_envelope_both_fields() {
    let envelope: ErrorEnvelope =
        serde_json::from_str(r#"{"error": {"message": "bad", "code": "E42"}}"#).unwrap();
    let detail = envelope.error.unwrap();

    assert_eq!(detail.message.as_deref(), Some("bad"));
    assert_eq!(detail.code.as_deref(), Some("E42"));
}

#[test]
fn test_error_envelope_absent() {
    let envelope: ErrorEnvelope = serde_json::from_str(r#"{"detail": "other"}"#).unwrap();

    assert!(envelope.error.is_none());
}

#[test]
fn test_error_detail_fields_optional() {
    let envelope: ErrorEnvelope = serde_json::from_str(r#"{"error": {}}"#).unwrap();
    let detail = envelope.error.unwrap();

    assert!(detail.message.is_none());
    assert!(detail.code.is_none());
}
