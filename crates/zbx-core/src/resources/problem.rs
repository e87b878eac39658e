//! Problem records.
//!
//! The remote renders every numeric field of `problem.get` results as a
//! string (IDs, timestamps, severities); the records keep them that way.

use serde::{Deserialize, Serialize};

use crate::params::GetParameters;

/// A tag filter rule for `problem.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProblemTagFilter {
    /// Tag name, matched exactly.
    pub tag: String,
    /// Tag value; match semantics depend on the operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<i64>,
}

/// Parameters for `problem.get`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProblemGetParameters {
    #[serde(flatten)]
    pub common: GetParameters,

    #[serde(rename = "eventids", skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<String>>,
    #[serde(rename = "groupids", skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(rename = "hostids", skip_serializing_if = "Option::is_none")]
    pub host_ids: Option<Vec<String>>,
    #[serde(rename = "objectids", skip_serializing_if = "Option::is_none")]
    pub object_ids: Option<Vec<String>>,

    /// Event source; defaults to 0 (trigger) on the remote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
    /// Object type; defaults to 0 (trigger) on the remote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<i64>,
    /// true returns only acknowledged problems, false only unacknowledged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppressed: Option<bool>,
    /// Severities to include; applies only to trigger problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severities: Option<Vec<i64>>,

    /// Tag rule evaluation: 0 And/Or (default), 2 Or.
    #[serde(rename = "evaltype", skip_serializing_if = "Option::is_none")]
    pub eval_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ProblemTagFilter>>,

    /// Include recently resolved problems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent: Option<bool>,
    #[serde(rename = "eventid_from", skip_serializing_if = "Option::is_none")]
    pub event_id_from: Option<String>,
    #[serde(rename = "eventid_till", skip_serializing_if = "Option::is_none")]
    pub event_id_till: Option<String>,
    #[serde(rename = "time_from", skip_serializing_if = "Option::is_none")]
    pub time_from: Option<i64>,
    #[serde(rename = "time_till", skip_serializing_if = "Option::is_none")]
    pub time_till: Option<i64>,

    #[serde(rename = "selectAcknowledges", skip_serializing_if = "Option::is_none")]
    pub select_acknowledges: Option<serde_json::Value>,
    #[serde(rename = "selectTags", skip_serializing_if = "Option::is_none")]
    pub select_tags: Option<serde_json::Value>,
    #[serde(
        rename = "selectSuppressionData",
        skip_serializing_if = "Option::is_none"
    )]
    pub select_suppression_data: Option<serde_json::Value>,
}

/// One entry returned by `problem.get`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Problem {
    #[serde(rename = "eventid", default)]
    pub event_id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub object: String,
    #[serde(rename = "objectid", default)]
    pub object_id: String,
    /// Creation time, Unix seconds.
    #[serde(default)]
    pub clock: String,
    #[serde(default)]
    pub ns: String,
    /// Recovery event ID and time; empty while unresolved.
    #[serde(rename = "r_eventid", default)]
    pub r_event_id: String,
    #[serde(rename = "r_clock", default)]
    pub r_clock: String,
    #[serde(rename = "r_ns", default)]
    pub r_ns: String,
    #[serde(rename = "cause_eventid", default)]
    pub cause_event_id: String,
    #[serde(rename = "correlationid", default)]
    pub correlation_id: String,
    /// User who manually closed the problem, if any.
    #[serde(rename = "userid", default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub acknowledged: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub suppressed: String,
    /// Operational data with expanded macros.
    #[serde(rename = "opdata", default)]
    pub op_data: String,

    // Present only when the corresponding select option was requested.
    #[serde(default)]
    pub urls: Vec<ProblemMediaUrl>,
    #[serde(default)]
    pub acknowledges: Vec<ProblemAcknowledge>,
    #[serde(default)]
    pub tags: Vec<ProblemTag>,
    #[serde(rename = "suppression_data", default)]
    pub suppression_data: Vec<ProblemSuppressionRef>,
}

/// A media-type URL attached to a problem.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemMediaUrl {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An acknowledge/update entry, returned with `selectAcknowledges`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemAcknowledge {
    #[serde(rename = "acknowledgeid", default)]
    pub acknowledge_id: String,
    #[serde(rename = "userid", default)]
    pub user_id: String,
    #[serde(rename = "eventid", default)]
    pub event_id: String,
    #[serde(default)]
    pub clock: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub action: String,
    #[serde(rename = "old_severity", default)]
    pub old_severity: String,
    #[serde(rename = "new_severity", default)]
    pub new_severity: String,
    #[serde(rename = "suppress_until", default)]
    pub suppress_until: String,
    #[serde(rename = "taskid", default)]
    pub task_id: String,
}

/// A problem tag, returned with `selectTags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemTag {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub value: String,
}

/// A suppression reference, returned with `selectSuppressionData`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemSuppressionRef {
    #[serde(rename = "maintenanceid", default)]
    pub maintenance_id: String,
    #[serde(rename = "userid", default)]
    pub user_id: String,
    #[serde(rename = "suppress_until", default)]
    pub suppress_until: String,
}
