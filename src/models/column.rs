use serde::{Deserialize, Serialize};

/// Column definition for table creation.
///
/// The declared type is an opaque string (e.g. `INTEGER`, `TEXT`, `REAL`,
/// `BLOB`); the client does not validate it. Flags and the default literal
/// are serialized only when set, matching the gateway's payload shape.
///
/// # Examples
///
/// ```rust
/// use dbforge_link::Column;
///
/// let id = Column::new("id", "INTEGER").primary_key();
/// let name = Column::new("name", "TEXT").not_null().unique();
/// let created = Column::new("created_at", "DATETIME").default_value("CURRENT_TIMESTAMP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Declared SQL type, passed through verbatim
    #[serde(rename = "type")]
    pub column_type: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub not_null: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,

    /// Optional default-value literal
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Column {
    /// Create a column with a name and declared type.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            primary_key: false,
            not_null: false,
            unique: false,
            default_value: None,
        }
    }

    /// Mark this column as the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark this column as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark this column as UNIQUE.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set a default-value literal (e.g. `CURRENT_TIMESTAMP`).
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }
}
