//! Login configuration.

use std::fmt;

/// The immutable login configuration of a session.
///
/// Exactly one mode is ever held: a username/password pair that is exchanged
/// for a bearer credential via `user.login`, or a pre-issued static API
/// token used directly as the bearer credential. The exclusive-or is
/// enforced by client construction; this enum cannot represent a mixed
/// state.
///
/// # Security
///
/// The password and token are never shown in Debug output.
#[derive(Clone)]
pub enum AuthScheme {
    /// Authenticate with the `user.login` method.
    UserPass { username: String, password: String },
    /// Present a pre-issued static API token; the login method is never
    /// invoked for this mode.
    ApiToken(String),
}

impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::UserPass { username, .. } => f
                .debug_struct("UserPass")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            AuthScheme::ApiToken(_) => f.debug_tuple("ApiToken").field(&"[REDACTED]").finish(),
        }
    }
}
