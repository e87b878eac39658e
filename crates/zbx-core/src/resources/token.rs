//! API token records.

use serde::{Deserialize, Serialize};

/// A pre-issued API token managed through the `token.*` methods.
///
/// Distinct from the bearer credential: this is the remote's token *object*;
/// the secret value only appears in `token.generate` responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "tokenid", skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// Name of the token; required for create operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ID of the user the token acts as.
    #[serde(rename = "userid", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Token status (0 enabled, 1 disabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    /// Time of last use; read-only, Unix seconds.
    #[serde(rename = "lastaccess", skip_serializing_if = "Option::is_none")]
    pub last_access: Option<i64>,
    /// Expiry time, Unix seconds; 0 for never.
    #[serde(rename = "expires_at", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// IDs of the created tokens.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenCreateResponse {
    #[serde(rename = "tokenids")]
    pub token_ids: Vec<String>,
}

/// One generated token secret.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenGenerateResponse {
    #[serde(rename = "tokenid")]
    pub token_id: String,
    pub token: String,
}

/// IDs of the deleted tokens.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenDeleteResponse {
    #[serde(rename = "tokenids")]
    pub token_ids: Vec<String>,
}
