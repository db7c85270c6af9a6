use serde::{Deserialize, Serialize};

/// Column metadata from schema introspection (`PRAGMA table_info`).
///
/// Boolean flags are derived by the response mapper from the textual
/// `notnull`/`pk` fields: the literal `"1"` means true, anything else false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column position in the table (0-indexed)
    #[serde(default)]
    pub cid: i64,

    #[serde(default)]
    pub name: String,

    /// Declared SQL type
    #[serde(default, rename = "type")]
    pub column_type: String,

    #[serde(default)]
    pub not_null: bool,

    /// Default-value literal, empty when none is declared
    #[serde(default)]
    pub default_value: String,

    #[serde(default)]
    pub primary_key: bool,
}
