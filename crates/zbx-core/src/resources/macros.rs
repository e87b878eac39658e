//! User macro record.

use serde::{Deserialize, Serialize};

/// A user macro defined on a host or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Macro {
    /// Macro name, including the enclosing braces, e.g. `{$DB_PORT}`.
    #[serde(rename = "macro")]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}
