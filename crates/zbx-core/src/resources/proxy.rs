//! Proxy records.

use serde::{Deserialize, Serialize};

use crate::params::GetParameters;

use super::Host;

/// Active proxy: the proxy connects to the server.
pub const PROXY_MODE_ACTIVE: i64 = 0;
/// Passive proxy: the server connects to the proxy.
pub const PROXY_MODE_PASSIVE: i64 = 1;

/// A monitoring proxy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Proxy {
    /// ID of the proxy; read-only, required for update operations.
    #[serde(rename = "proxyid", skip_serializing_if = "Option::is_none")]
    pub proxy_id: Option<String>,
    /// Name of the proxy; required for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type of proxy (0 active, 1 passive); required for create operations.
    #[serde(rename = "operating_mode")]
    pub operating_mode: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ID of the proxy group; "0" when not assigned to any group.
    #[serde(rename = "proxy_groupid", skip_serializing_if = "Option::is_none")]
    pub proxy_group_id: Option<String>,
    /// Address for active agents; required when grouped.
    #[serde(rename = "local_address", skip_serializing_if = "Option::is_none")]
    pub local_address: Option<String>,
    #[serde(rename = "local_port", skip_serializing_if = "Option::is_none")]
    pub local_port: Option<String>,
    /// Address the server connects to; required for passive proxies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(rename = "allowed_addresses", skip_serializing_if = "Option::is_none")]
    pub allowed_addresses: Option<String>,

    #[serde(rename = "tls_connect", skip_serializing_if = "Option::is_none")]
    pub tls_connect: Option<i64>,
    #[serde(rename = "tls_accept", skip_serializing_if = "Option::is_none")]
    pub tls_accept: Option<i64>,
    #[serde(rename = "tls_issuer", skip_serializing_if = "Option::is_none")]
    pub tls_issuer: Option<String>,
    #[serde(rename = "tls_subject", skip_serializing_if = "Option::is_none")]
    pub tls_subject: Option<String>,
    #[serde(rename = "tls_psk_identity", skip_serializing_if = "Option::is_none")]
    pub tls_psk_identity: Option<String>,
    #[serde(rename = "tls_psk", skip_serializing_if = "Option::is_none")]
    pub tls_psk: Option<String>,

    /// Time of the proxy's last connection to the server; read-only.
    #[serde(rename = "lastaccess", skip_serializing_if = "Option::is_none")]
    pub last_access: Option<i64>,
    /// Proxy version; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Version compatibility with the server; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<i64>,
    /// Connectivity state; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i64>,
}

/// Parameters for `proxy.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProxyGetParameters {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(rename = "proxyids", skip_serializing_if = "Option::is_none")]
    pub proxy_ids: Option<Vec<String>>,
    #[serde(rename = "proxy_groupids", skip_serializing_if = "Option::is_none")]
    pub proxy_group_ids: Option<Vec<String>>,
    #[serde(rename = "selectAssignedHosts", skip_serializing_if = "Option::is_none")]
    pub select_assigned_hosts: Option<serde_json::Value>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<serde_json::Value>,
    #[serde(rename = "selectProxyGroup", skip_serializing_if = "Option::is_none")]
    pub select_proxy_group: Option<serde_json::Value>,
}

/// Parameters for `proxy.create`: the proxy plus hosts to assign to it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProxyCreateParameters {
    #[serde(flatten)]
    pub proxy: Proxy,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<Host>,
}

/// IDs of the created proxies.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProxyCreateResponse {
    #[serde(rename = "proxyids")]
    pub proxy_ids: Vec<String>,
}

/// IDs of the deleted proxies.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProxyDeleteResponse {
    #[serde(rename = "proxyids")]
    pub proxy_ids: Vec<String>,
}
