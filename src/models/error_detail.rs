use serde::{Deserialize, Serialize};

/// The optional error envelope a failing response may carry:
/// `{"error": {"message": ..., "code": ...}}`, both fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorDetail>,
}

/// Error details inside the envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub message: Option<String>,

    /// Machine error code
    pub code: Option<String>,
}
