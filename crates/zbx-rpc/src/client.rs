//! The API client and its dispatch pipeline.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use zbx_core::{BearerToken, Error, Result};

use crate::config::{ClientConfig, ErrorCallback};
use crate::projector::project;
use crate::refresher::TokenRefresher;
use crate::rpc::envelope::{RequestEnvelope, decode};
use crate::rpc::transport::RpcTransport;
use crate::session::Session;

/// A client for one remote API endpoint.
///
/// Cheap to clone; clones share the session (and its bearer credential) and
/// the background refresher. Dropping the last clone signals the refresher
/// to shut down.
///
/// The resource surface lives on the [`ManagementApi`](zbx_core::ManagementApi)
/// trait; [`call`](Client::call) is the generic dispatch underneath it and
/// is available for methods the surface does not cover.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    session: Arc<Session>,
    refresher: TokenRefresher,
    bearer_lifetime: Option<Duration>,
    on_refresh_error: Option<ErrorCallback>,
}

impl Client {
    /// Validate the configuration and build a client.
    ///
    /// Fails when the URL is empty or invalid, or unless exactly one of the
    /// username/password pair and the API token is supplied.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let transport = RpcTransport::new(config.url, config.timeout);
        let session = Arc::new(Session::new(config.scheme, transport));

        Ok(Self {
            inner: Arc::new(ClientInner {
                session,
                refresher: TokenRefresher::new(),
                bearer_lifetime: config.bearer_lifetime,
                on_refresh_error: config.on_refresh_error,
            }),
        })
    }

    /// Snapshot of the currently installed bearer credential. Empty until
    /// the first successful authentication.
    pub fn bearer_token(&self) -> BearerToken {
        self.inner.session.bearer()
    }

    /// Dispatch one API call.
    ///
    /// Reads the current bearer snapshot, wraps `params` in a request
    /// envelope, performs the HTTP exchange and projects the result into
    /// `T`. A protocol-level `error` object in the response wins over any
    /// `result` payload. Dropping the returned future cancels the exchange;
    /// a configured request timeout surfaces as a transport error.
    #[instrument(skip(self, params))]
    pub async fn call<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let bearer = self.inner.session.bearer();
        let body = RequestEnvelope::new(method, params).encode()?;

        debug!(method, "dispatching API call");
        let raw = self
            .inner
            .session
            .transport()
            .send(body, Some(&bearer))
            .await?;

        let envelope = decode(&raw)?;
        if let Some(error) = envelope.error {
            return Err(Error::Api(error));
        }

        let result = envelope.result.unwrap_or(serde_json::Value::Null);
        Ok(project(result)?)
    }

    pub(crate) fn session(&self) -> &Session {
        &self.inner.session
    }

    pub(crate) fn session_handle(&self) -> Arc<Session> {
        Arc::clone(&self.inner.session)
    }

    pub(crate) fn refresher(&self) -> &TokenRefresher {
        &self.inner.refresher
    }

    pub(crate) fn bearer_lifetime(&self) -> Option<Duration> {
        self.inner.bearer_lifetime
    }

    pub(crate) fn refresh_error_callback(&self) -> Option<ErrorCallback> {
        self.inner.on_refresh_error.clone()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.session.transport().url().as_str())
            .field("bearer", &"[REDACTED]")
            .finish()
    }
}
