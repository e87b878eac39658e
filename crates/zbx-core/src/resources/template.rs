//! Template records.

use serde::{Deserialize, Serialize};

use crate::params::GetParameters;

/// A configuration template linkable to hosts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    /// ID of the template; read-only, required for update operations.
    #[serde(rename = "templateid", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Technical name of the template; required for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Visible name; defaults to the technical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Vendor name and version; set both or neither.
    #[serde(rename = "vendor_name", skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(rename = "vendor_version", skip_serializing_if = "Option::is_none")]
    pub vendor_version: Option<String>,
}

/// Parameters for `template.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateGetParameters {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(rename = "templateids", skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<String>>,
    #[serde(rename = "groupids", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(rename = "parentTemplateids", skip_serializing_if = "Option::is_none")]
    pub parent_template_ids: Option<Vec<String>>,
    #[serde(rename = "hostids", skip_serializing_if = "Option::is_none")]
    pub host_ids: Option<Vec<String>>,
    #[serde(rename = "itemids", skip_serializing_if = "Option::is_none")]
    pub item_ids: Option<Vec<String>>,
    #[serde(rename = "triggerids", skip_serializing_if = "Option::is_none")]
    pub trigger_ids: Option<Vec<String>>,
    #[serde(rename = "with_items", skip_serializing_if = "Option::is_none")]
    pub with_items: Option<bool>,
    #[serde(rename = "with_triggers", skip_serializing_if = "Option::is_none")]
    pub with_triggers: Option<bool>,
    #[serde(rename = "with_graphs", skip_serializing_if = "Option::is_none")]
    pub with_graphs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<std::collections::HashMap<String, String>>>,
    #[serde(rename = "selectHosts", skip_serializing_if = "Option::is_none")]
    pub select_hosts: Option<serde_json::Value>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<serde_json::Value>,
    #[serde(rename = "selectTemplates", skip_serializing_if = "Option::is_none")]
    pub select_templates: Option<serde_json::Value>,
    #[serde(
        rename = "selectParentTemplates",
        skip_serializing_if = "Option::is_none"
    )]
    pub select_parent_templates: Option<serde_json::Value>,
    #[serde(rename = "selectMacros", skip_serializing_if = "Option::is_none")]
    pub select_macros: Option<serde_json::Value>,
    #[serde(rename = "limitSelects", skip_serializing_if = "Option::is_none")]
    pub limit_selects: Option<u64>,
}
