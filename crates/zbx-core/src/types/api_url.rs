//! API endpoint URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::ConfigError;

/// A validated Zabbix API endpoint URL.
///
/// The URL points at the full JSON-RPC endpoint, typically ending in
/// `/api_jsonrpc.php`, and every request is POSTed to it as-is.
///
/// # Example
///
/// ```
/// use zbx_core::ApiUrl;
///
/// let url = ApiUrl::new("https://zabbix.example.com/api_jsonrpc.php").unwrap();
/// assert_eq!(url.as_str(), "https://zabbix.example.com/api_jsonrpc.php");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is relative, has no host, or uses a
    /// scheme other than `http` or `https`.
    pub fn new(s: impl AsRef<str>) -> Result<Self, ConfigError> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the endpoint URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), ConfigError> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            });
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            });
        }

        if url.host_str().is_none() {
            return Err(ConfigError::InvalidUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
