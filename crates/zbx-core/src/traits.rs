//! The management API surface.

use std::time::Duration;

use async_trait::async_trait;

use crate::resources::{
    Host, HostCreateResponse, HostDeleteResponse, HostGetParameters, HostGroup,
    HostGroupGetParameters, HostUpdateResponse, Problem, ProblemGetParameters, Proxy,
    ProxyCreateParameters, ProxyCreateResponse, ProxyDeleteResponse, ProxyGetParameters, Template,
    TemplateGetParameters, Token, TokenCreateResponse, TokenDeleteResponse, TokenGenerateResponse,
};
use crate::Result;

/// A client for the remote management API.
///
/// Session lifecycle plus one thin passthrough method per remote operation.
/// All methods may be called from multiple tasks concurrently; each call is
/// an independent network exchange.
#[async_trait]
pub trait ManagementApi: Send + Sync {
    /// Perform the login exchange and install the resulting bearer
    /// credential. For static-token sessions this re-installs the
    /// configured token without a network call.
    async fn authenticate(&self) -> Result<()>;

    /// Start the background task that re-authenticates every `interval`.
    async fn start_token_refresher(&self, interval: Duration) -> Result<()>;

    /// Stop the background refresh task. Returns once the task has exited;
    /// no refresh fires after this completes.
    async fn stop_token_refresher(&self);

    async fn host_get(&self, params: &HostGetParameters) -> Result<Vec<Host>>;
    async fn host_create(&self, host: &Host) -> Result<HostCreateResponse>;
    async fn host_update(&self, host: &Host) -> Result<HostUpdateResponse>;
    async fn host_delete(&self, ids: &[String]) -> Result<HostDeleteResponse>;

    async fn hostgroup_get(&self, params: &HostGroupGetParameters) -> Result<Vec<HostGroup>>;

    async fn template_get(&self, params: &TemplateGetParameters) -> Result<Vec<Template>>;

    async fn proxy_get(&self, params: &ProxyGetParameters) -> Result<Vec<Proxy>>;
    async fn proxy_create(&self, params: &ProxyCreateParameters) -> Result<ProxyCreateResponse>;
    async fn proxy_delete(&self, ids: &[String]) -> Result<ProxyDeleteResponse>;

    async fn token_create(&self, token: &Token) -> Result<TokenCreateResponse>;
    async fn token_generate(&self, ids: &[String]) -> Result<Vec<TokenGenerateResponse>>;
    async fn token_delete(&self, ids: &[String]) -> Result<TokenDeleteResponse>;

    async fn problem_get(&self, params: &ProblemGetParameters) -> Result<Vec<Problem>>;

    /// Fetch the remote API version string.
    async fn api_version(&self) -> Result<String>;

    /// End the session with `user.logout`. On success the stored bearer
    /// credential is cleared; the remote has invalidated it.
    async fn logout(&self) -> Result<bool>;
}
