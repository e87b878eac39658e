//! Host group records.

use serde::{Deserialize, Serialize};

use crate::params::GetParameters;

/// A host group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostGroup {
    /// ID of the group; read-only, required for update operations.
    #[serde(rename = "groupid", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Name of the group; required for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Origin of the group; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Parameters for `hostgroup.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostGroupGetParameters {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(rename = "groupids", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(rename = "hostids", skip_serializing_if = "Option::is_none")]
    pub host_ids: Option<Vec<String>>,
    #[serde(rename = "maintenanceids", skip_serializing_if = "Option::is_none")]
    pub maintenance_ids: Option<Vec<String>>,
    #[serde(rename = "triggerids", skip_serializing_if = "Option::is_none")]
    pub trigger_ids: Option<Vec<String>>,
    #[serde(rename = "with_hosts", skip_serializing_if = "Option::is_none")]
    pub with_hosts: Option<bool>,
    #[serde(rename = "with_monitored_hosts", skip_serializing_if = "Option::is_none")]
    pub with_monitored_hosts: Option<bool>,
    #[serde(rename = "with_items", skip_serializing_if = "Option::is_none")]
    pub with_items: Option<bool>,
    #[serde(rename = "with_triggers", skip_serializing_if = "Option::is_none")]
    pub with_triggers: Option<bool>,
    #[serde(rename = "with_graphs", skip_serializing_if = "Option::is_none")]
    pub with_graphs: Option<bool>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<serde_json::Value>,
    #[serde(rename = "limitSelects", skip_serializing_if = "Option::is_none")]
    pub limit_selects: Option<u64>,
}
