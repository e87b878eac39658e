//! Common query options shared by every `*.get` method.

use std::collections::HashMap;

use serde::Serialize;

/// Value for `output`-style options selecting all object properties.
pub const OUTPUT_EXTEND: &str = "extend";
/// Value for `output`-style options returning only a count.
pub const OUTPUT_COUNT: &str = "count";

/// Ascending sort order.
pub const SORT_ASC: &str = "ASC";
/// Descending sort order.
pub const SORT_DESC: &str = "DESC";

/// Options accepted by every `*.get` method of the remote API.
///
/// All fields are optional and omitted from the request when unset, matching
/// the remote's treatment of absent parameters. `output`, `sortorder` and
/// similar polymorphic options take either a string (`"extend"`, `"count"`)
/// or a list of property names, hence the loose JSON value type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(rename = "countOutput", skip_serializing_if = "Option::is_none")]
    pub count_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(rename = "excludeSearch", skip_serializing_if = "Option::is_none")]
    pub exclude_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<HashMap<String, String>>,
    #[serde(rename = "searchByAny", skip_serializing_if = "Option::is_none")]
    pub search_by_any: Option<bool>,
    #[serde(
        rename = "searchWildcardsEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub search_wildcards_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortfield: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortorder: Option<serde_json::Value>,
    #[serde(rename = "startSearch", skip_serializing_if = "Option::is_none")]
    pub start_search: Option<bool>,
    #[serde(rename = "preservekeys", skip_serializing_if = "Option::is_none")]
    pub preserve_keys: Option<bool>,
}
