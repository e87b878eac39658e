//! Host tag record.

use serde::{Deserialize, Serialize};

/// A tag attached to a host or template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}
