//! Client construction options.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use zbx_core::{ApiUrl, AuthScheme, ConfigError, Error};

/// Callback receiving errors from failed background refresh ticks.
pub type ErrorCallback = Arc<dyn Fn(Error) + Send + Sync>;

/// Construction options for [`Client`](crate::Client).
///
/// `url` is required and must be the full JSON-RPC endpoint. Exactly one of
/// the `username`/`password` pair and `api_token` must be supplied;
/// [`Client::new`](crate::Client::new) fails validation otherwise.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Full endpoint URL, e.g. `https://zabbix.example.com/api_jsonrpc.php`.
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Pre-issued static API token; mutually exclusive with the pair above.
    pub api_token: Option<String>,
    /// Remote lifetime of issued bearer credentials. When set, refresh
    /// intervals must undercut it by [`REFRESH_MARGIN`](crate::REFRESH_MARGIN).
    pub bearer_lifetime: Option<Duration>,
    /// Per-request deadline; an elapsed deadline surfaces as a transport
    /// timeout error.
    pub timeout: Option<Duration>,
    /// Receives the error of every failed background refresh tick.
    pub on_refresh_error: Option<ErrorCallback>,
}

/// Outcome of config validation: the parts the client is built from.
pub(crate) struct ValidatedConfig {
    pub url: ApiUrl,
    pub scheme: AuthScheme,
    pub bearer_lifetime: Option<Duration>,
    pub timeout: Option<Duration>,
    pub on_refresh_error: Option<ErrorCallback>,
}

impl ClientConfig {
    pub(crate) fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }
        let url = ApiUrl::new(&self.url)?;

        let username = self.username.unwrap_or_default();
        let password = self.password.unwrap_or_default();
        let api_token = self.api_token.unwrap_or_default();

        let scheme = if api_token.is_empty() {
            if username.is_empty() || password.is_empty() {
                return Err(ConfigError::MissingCredentials);
            }
            AuthScheme::UserPass { username, password }
        } else {
            if !username.is_empty() || !password.is_empty() {
                return Err(ConfigError::ConflictingCredentials);
            }
            AuthScheme::ApiToken(api_token)
        };

        Ok(ValidatedConfig {
            url,
            scheme,
            bearer_lifetime: self.bearer_lifetime,
            timeout: self.timeout,
            on_refresh_error: self.on_refresh_error,
        })
    }
}

// Secrets and the callback are hidden from Debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("bearer_lifetime", &self.bearer_lifetime)
            .field("timeout", &self.timeout)
            .field(
                "on_refresh_error",
                &self.on_refresh_error.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ClientConfig {
        ClientConfig {
            url: "https://zabbix.example.com/api_jsonrpc.php".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_user_pass() {
        let config = ClientConfig {
            username: Some("Admin".to_string()),
            password: Some("zabbix".to_string()),
            ..base()
        };
        let validated = config.validate().unwrap();
        assert!(matches!(validated.scheme, AuthScheme::UserPass { .. }));
    }

    #[test]
    fn accepts_api_token() {
        let config = ClientConfig {
            api_token: Some("93a1a67d112e".to_string()),
            ..base()
        };
        let validated = config.validate().unwrap();
        assert!(matches!(validated.scheme, AuthScheme::ApiToken(_)));
    }

    #[test]
    fn rejects_missing_credentials() {
        assert!(matches!(
            base().validate(),
            Err(ConfigError::MissingCredentials)
        ));
    }

    #[test]
    fn rejects_partial_user_pass() {
        let config = ClientConfig {
            username: Some("Admin".to_string()),
            ..base()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCredentials)
        ));
    }

    #[test]
    fn rejects_both_modes() {
        let config = ClientConfig {
            username: Some("Admin".to_string()),
            password: Some("zabbix".to_string()),
            api_token: Some("93a1a67d112e".to_string()),
            ..base()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConflictingCredentials)
        ));
    }

    #[test]
    fn rejects_empty_url() {
        let config = ClientConfig {
            url: String::new(),
            api_token: Some("93a1a67d112e".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyUrl)));
    }

    #[test]
    fn rejects_invalid_url() {
        let config = ClientConfig {
            url: "not a url".to_string(),
            api_token: Some("93a1a67d112e".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn debug_hides_secrets() {
        let config = ClientConfig {
            username: Some("Admin".to_string()),
            password: Some("zabbix".to_string()),
            ..base()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("Admin"));
        assert!(!debug.contains("zabbix\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
