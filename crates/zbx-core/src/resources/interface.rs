//! Host interface records.

use serde::{Deserialize, Serialize};

/// Zabbix agent interface.
pub const INTERFACE_AGENT: i64 = 1;
/// SNMP interface.
pub const INTERFACE_SNMP: i64 = 2;
/// IPMI interface.
pub const INTERFACE_IPMI: i64 = 3;
/// JMX interface.
pub const INTERFACE_JMX: i64 = 4;

/// A host interface.
///
/// The remote requires `type`, `main`, `useip`, `ip`/`dns` and `port` on
/// creation; omitting a required field is rejected server-side with a
/// protocol error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostInterface {
    #[serde(rename = "type")]
    pub interface_type: i64,
    /// Whether this is the default interface of its type (0 no, 1 yes).
    pub main: i64,
    /// Connect via IP (1) or DNS name (0).
    #[serde(rename = "useip")]
    pub use_ip: i64,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub dns: String,
    #[serde(default)]
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<InterfaceDetails>,
}

/// Additional interface properties, used by SNMP interfaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk: Option<i64>,
    #[serde(rename = "securityname", skip_serializing_if = "Option::is_none")]
    pub security_name: Option<String>,
    #[serde(rename = "contextname", skip_serializing_if = "Option::is_none")]
    pub context_name: Option<String>,
    #[serde(rename = "securitylevel", skip_serializing_if = "Option::is_none")]
    pub security_level: Option<i64>,
}
