//! Host inventory record.

use serde::{Deserialize, Serialize};

/// Inventory properties of a host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(rename = "macaddress_a", skip_serializing_if = "Option::is_none")]
    pub mac_address_a: Option<String>,
    #[serde(rename = "macaddress_b", skip_serializing_if = "Option::is_none")]
    pub mac_address_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
