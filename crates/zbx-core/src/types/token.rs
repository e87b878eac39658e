//! Bearer credential type.

use std::fmt;

/// The bearer credential presented on every authenticated request.
///
/// Starts empty on a fresh session and is replaced atomically by the
/// authenticator after each successful login exchange.
///
/// # Security
///
/// The token value is never shown in Debug output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Create a new bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers; never log it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when no credential has been installed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Hide the token value in Debug output
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}
