//! Session state: the credential store and the authenticator.

use std::fmt;
use std::sync::RwLock;

use serde::Serialize;
use tracing::{debug, info, instrument};

use zbx_core::{AuthError, AuthScheme, BearerToken, Result};

use crate::rpc::envelope::{RequestEnvelope, decode};
use crate::rpc::transport::RpcTransport;

/// Login method name.
const USER_LOGIN: &str = "user.login";

/// Params of the login exchange.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Shared session state for one client.
///
/// Holds the immutable login configuration plus the mutable bearer
/// credential — the only shared mutable state in the client. Readers take
/// snapshots under a read lock; the authenticator replaces the value
/// atomically under the write lock, so no caller ever observes a partial
/// update.
pub(crate) struct Session {
    scheme: AuthScheme,
    transport: RpcTransport,
    bearer: RwLock<BearerToken>,
    // Serializes login exchanges: a slow, reordered response can never
    // overwrite a newer credential.
    login_flight: tokio::sync::Mutex<()>,
}

impl Session {
    pub(crate) fn new(scheme: AuthScheme, transport: RpcTransport) -> Self {
        Self {
            scheme,
            transport,
            bearer: RwLock::new(BearerToken::default()),
            login_flight: tokio::sync::Mutex::new(()),
        }
    }

    pub(crate) fn transport(&self) -> &RpcTransport {
        &self.transport
    }

    /// Snapshot of the current bearer credential.
    pub(crate) fn bearer(&self) -> BearerToken {
        self.bearer.read().unwrap().clone()
    }

    /// Replace the stored credential.
    fn install(&self, token: BearerToken) {
        *self.bearer.write().unwrap() = token;
    }

    /// Drop the stored credential, returning to the pre-login state.
    pub(crate) fn clear(&self) {
        self.install(BearerToken::default());
    }

    /// Run the login exchange for the configured mode.
    ///
    /// On failure the previously stored credential is left untouched: a
    /// stale-but-valid credential beats none at all. Concurrent calls are
    /// serialized.
    #[instrument(skip(self), fields(url = %self.transport.url()))]
    pub(crate) async fn authenticate(&self) -> Result<()> {
        let _flight = self.login_flight.lock().await;

        match &self.scheme {
            AuthScheme::ApiToken(token) => {
                // Static tokens are never exchanged; re-validation is a
                // pass-through re-install.
                debug!("installing static API token");
                self.install(BearerToken::new(token.clone()));
                Ok(())
            }
            AuthScheme::UserPass { username, password } => {
                info!("authenticating with user.login");
                let params = LoginRequest { username, password };
                let body = RequestEnvelope::new(USER_LOGIN, &params).encode()?;

                // The login call itself carries no Authorization header.
                let raw = self
                    .transport
                    .send(body, None)
                    .await
                    .map_err(AuthError::Exchange)?;

                let envelope = decode(&raw).map_err(|e| AuthError::MalformedResponse {
                    message: e.to_string(),
                })?;

                if let Some(error) = envelope.error {
                    return Err(AuthError::Rejected(error).into());
                }

                let token = envelope
                    .result
                    .as_ref()
                    .and_then(|value| value.as_str())
                    .ok_or_else(|| AuthError::MalformedResponse {
                        message: "result is not a token string".to_string(),
                    })?;

                self.install(BearerToken::new(token));
                debug!("bearer credential installed");
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("scheme", &self.scheme)
            .field("url", &self.transport.url().as_str())
            .field("bearer", &"[REDACTED]")
            .finish()
    }
}
