//! HTTP transport for JSON-RPC exchanges.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use tracing::{instrument, trace};

use zbx_core::{ApiUrl, BearerToken, TransportError};

/// Media type of the JSON-RPC protocol.
const MEDIA_TYPE: &str = "application/json-rpc";

/// Issues single-attempt HTTP exchanges carrying envelope bytes.
///
/// Stateless per call; the underlying client is shared but no connection
/// state is managed here. Exactly one attempt is made per `send` — retry
/// policy is deliberately absent.
#[derive(Debug, Clone)]
pub(crate) struct RpcTransport {
    http: reqwest::Client,
    url: ApiUrl,
}

impl RpcTransport {
    pub(crate) fn new(url: ApiUrl, timeout: Option<Duration>) -> Self {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("zbx/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("failed to build HTTP client");

        Self { http, url }
    }

    /// Returns the endpoint this transport posts to.
    pub(crate) fn url(&self) -> &ApiUrl {
        &self.url
    }

    /// POST one envelope and return the raw response body.
    ///
    /// `bearer` is attached as an `Authorization` header when given; the
    /// login exchange sends none.
    #[instrument(skip(self, body, bearer), fields(url = %self.url))]
    pub(crate) async fn send(
        &self,
        body: Vec<u8>,
        bearer: Option<&BearerToken>,
    ) -> Result<Vec<u8>, TransportError> {
        let mut request = self
            .http
            .post(self.url.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE))
            .body(body);

        if let Some(token) = bearer {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(
                |e| TransportError::Http {
                    message: e.to_string(),
                },
            )?;
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await.map_err(map_reqwest)?;

        let status = response.status();
        trace!(status = %status, "API response");
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest)?;
        Ok(bytes.to_vec())
    }
}

/// Map reqwest failures onto the transport error taxonomy.
fn map_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
