//! Host resource records.

use serde::{Deserialize, Serialize};

use crate::params::GetParameters;

use super::{HostGroup, HostInterface, Inventory, Macro, Tag, Template};

/// Host is monitored.
pub const HOST_STATUS_MONITORED: i64 = 0;
/// Host is not monitored.
pub const HOST_STATUS_UNMONITORED: i64 = 1;

/// Connections to the host are unencrypted.
pub const TLS_NO_ENCRYPTION: i64 = 1;
/// Connections use a pre-shared key.
pub const TLS_PSK: i64 = 2;
/// Connections use a certificate.
pub const TLS_CERT: i64 = 4;

/// Host is monitored by the server directly.
pub const MONITORED_BY_SERVER: i64 = 0;
/// Host is monitored through a proxy.
pub const MONITORED_BY_PROXY: i64 = 1;
/// Host is monitored through a proxy group.
pub const MONITORED_BY_PROXY_GROUP: i64 = 2;

/// A monitored host.
///
/// Read-only fields (`hostid`, `flags`, maintenance state, availability) are
/// filled by the remote on `host.get`; create operations require at least
/// the technical name and one interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Host {
    /// ID of the host; read-only, required for update operations.
    #[serde(rename = "hostid", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    /// Technical name of the host; required for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Visible name; defaults to the technical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Origin of the host (0 plain, 4 discovered); read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    /// Inventory population mode (-1 disabled, 0 manual, 1 automatic).
    #[serde(rename = "inventory_mode", skip_serializing_if = "Option::is_none")]
    pub inventory_mode: Option<i64>,
    /// Status of the host (0 monitored, 1 unmonitored).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Source used to monitor the host (0 server, 1 proxy, 2 proxy group).
    #[serde(rename = "monitored_by", skip_serializing_if = "Option::is_none")]
    pub monitored_by: Option<i64>,
    /// ID of the monitoring proxy; required when monitored by proxy.
    #[serde(rename = "proxyid", skip_serializing_if = "Option::is_none")]
    pub proxy_id: Option<String>,
    /// ID of the monitoring proxy group; required when monitored by group.
    #[serde(rename = "proxy_groupid", skip_serializing_if = "Option::is_none")]
    pub proxy_group_id: Option<String>,
    /// Proxy assigned by the server when monitored by a group; read-only.
    #[serde(rename = "assigned_proxyid", skip_serializing_if = "Option::is_none")]
    pub assigned_proxy_id: Option<String>,

    // TLS settings; the PSK identity and key are write-only on the remote.
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

    // IPMI settings.
    #[serde(rename = "ipmi_authtype", skip_serializing_if = "Option::is_none")]
    pub ipmi_authtype: Option<i64>,
    #[serde(rename = "ipmi_privilege", skip_serializing_if = "Option::is_none")]
    pub ipmi_privilege: Option<i64>,
    #[serde(rename = "ipmi_username", skip_serializing_if = "Option::is_none")]
    pub ipmi_username: Option<String>,
    #[serde(rename = "ipmi_password", skip_serializing_if = "Option::is_none")]
    pub ipmi_password: Option<String>,

    // Effective maintenance state; all read-only.
    #[serde(rename = "maintenance_from", skip_serializing_if = "Option::is_none")]
    pub maintenance_from: Option<i64>,
    #[serde(rename = "maintenance_status", skip_serializing_if = "Option::is_none")]
    pub maintenance_status: Option<i64>,
    #[serde(rename = "maintenance_type", skip_serializing_if = "Option::is_none")]
    pub maintenance_type: Option<i64>,
    #[serde(rename = "maintenanceid", skip_serializing_if = "Option::is_none")]
    pub maintenance_id: Option<String>,

    /// Active interface availability (0 unknown, 1 up, 2 down); read-only.
    #[serde(rename = "active_available", skip_serializing_if = "Option::is_none")]
    pub active_available: Option<i64>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub interfaces: Vec<HostInterface>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<HostGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub templates: Vec<Template>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub macros: Vec<Macro>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Inventory>,
}

/// Parameters for `host.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGetParameters {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(rename = "hostids", skip_serializing_if = "Option::is_none")]
    pub host_ids: Option<Vec<String>>,
    #[serde(rename = "groupids", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(rename = "interfaceids", skip_serializing_if = "Option::is_none")]
    pub interface_ids: Option<Vec<String>>,
    #[serde(rename = "itemids", skip_serializing_if = "Option::is_none")]
    pub item_ids: Option<Vec<String>>,
    #[serde(rename = "maintenanceids", skip_serializing_if = "Option::is_none")]
    pub maintenance_ids: Option<Vec<String>>,
    #[serde(rename = "proxyids", skip_serializing_if = "Option::is_none")]
    pub proxy_ids: Option<Vec<String>>,
    #[serde(rename = "templateids", skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<String>>,
    #[serde(rename = "triggerids", skip_serializing_if = "Option::is_none")]
    pub trigger_ids: Option<Vec<String>>,
    #[serde(rename = "monitored_hosts", skip_serializing_if = "Option::is_none")]
    pub monitored_hosts: Option<bool>,
    #[serde(rename = "templated_hosts", skip_serializing_if = "Option::is_none")]
    pub templated_hosts: Option<bool>,
    #[serde(rename = "with_items", skip_serializing_if = "Option::is_none")]
    pub with_items: Option<bool>,
    #[serde(rename = "with_triggers", skip_serializing_if = "Option::is_none")]
    pub with_triggers: Option<bool>,
    #[serde(rename = "with_graphs", skip_serializing_if = "Option::is_none")]
    pub with_graphs: Option<bool>,
    #[serde(rename = "selectGroups", skip_serializing_if = "Option::is_none")]
    pub select_groups: Option<serde_json::Value>,
    #[serde(rename = "selectInterfaces", skip_serializing_if = "Option::is_none")]
    pub select_interfaces: Option<serde_json::Value>,
    #[serde(rename = "selectInventory", skip_serializing_if = "Option::is_none")]
    pub select_inventory: Option<serde_json::Value>,
    #[serde(rename = "selectMacros", skip_serializing_if = "Option::is_none")]
    pub select_macros: Option<serde_json::Value>,
    #[serde(
        rename = "selectParentTemplates",
        skip_serializing_if = "Option::is_none"
    )]
    pub select_parent_templates: Option<serde_json::Value>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<serde_json::Value>,
    #[serde(rename = "limitSelects", skip_serializing_if = "Option::is_none")]
    pub limit_selects: Option<u64>,
    #[serde(rename = "searchInventory", skip_serializing_if = "Option::is_none")]
    pub search_inventory: Option<std::collections::HashMap<String, String>>,
}

/// IDs of the created hosts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HostCreateResponse {
    #[serde(rename = "hostids")]
    pub host_ids: Vec<String>,
}

/// IDs of the deleted hosts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HostDeleteResponse {
    #[serde(rename = "hostids")]
    pub host_ids: Vec<String>,
}

/// IDs of the updated hosts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HostUpdateResponse {
    #[serde(rename = "hostids")]
    pub host_ids: Vec<String>,
}
