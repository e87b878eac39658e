//! The resource surface: one passthrough method per remote operation.

use std::time::Duration;

use async_trait::async_trait;

use zbx_core::{
    ConfigError, Host, HostCreateResponse, HostDeleteResponse, HostGetParameters, HostGroup,
    HostGroupGetParameters, HostUpdateResponse, ManagementApi, Problem, ProblemGetParameters,
    Proxy, ProxyCreateParameters, ProxyCreateResponse, ProxyDeleteResponse, ProxyGetParameters,
    Result, Template, TemplateGetParameters, Token, TokenCreateResponse, TokenDeleteResponse,
    TokenGenerateResponse,
};

use crate::client::Client;
use crate::refresher::REFRESH_MARGIN;

// Remote method names.
const HOST_GET: &str = "host.get";
const HOST_CREATE: &str = "host.create";
const HOST_UPDATE: &str = "host.update";
const HOST_DELETE: &str = "host.delete";
const HOSTGROUP_GET: &str = "hostgroup.get";
const TEMPLATE_GET: &str = "template.get";
const PROXY_GET: &str = "proxy.get";
const PROXY_CREATE: &str = "proxy.create";
const PROXY_DELETE: &str = "proxy.delete";
const TOKEN_CREATE: &str = "token.create";
const TOKEN_GENERATE: &str = "token.generate";
const TOKEN_DELETE: &str = "token.delete";
const PROBLEM_GET: &str = "problem.get";
const APIINFO_VERSION: &str = "apiinfo.version";
const USER_LOGOUT: &str = "user.logout";

#[async_trait]
impl ManagementApi for Client {
    async fn authenticate(&self) -> Result<()> {
        self.session().authenticate().await
    }

    async fn start_token_refresher(&self, interval: Duration) -> Result<()> {
        if let Some(lifetime) = self.bearer_lifetime() {
            if interval + REFRESH_MARGIN >= lifetime {
                return Err(ConfigError::RefreshIntervalTooLong { interval, lifetime }.into());
            }
        }
        self.refresher()
            .start(self.session_handle(), interval, self.refresh_error_callback())
            .await
    }

    async fn stop_token_refresher(&self) {
        self.refresher().stop().await
    }

    async fn host_get(&self, params: &HostGetParameters) -> Result<Vec<Host>> {
        self.call(HOST_GET, params).await
    }

    async fn host_create(&self, host: &Host) -> Result<HostCreateResponse> {
        self.call(HOST_CREATE, host).await
    }

    async fn host_update(&self, host: &Host) -> Result<HostUpdateResponse> {
        self.call(HOST_UPDATE, host).await
    }

    async fn host_delete(&self, ids: &[String]) -> Result<HostDeleteResponse> {
        self.call(HOST_DELETE, ids).await
    }

    async fn hostgroup_get(&self, params: &HostGroupGetParameters) -> Result<Vec<HostGroup>> {
        self.call(HOSTGROUP_GET, params).await
    }

    async fn template_get(&self, params: &TemplateGetParameters) -> Result<Vec<Template>> {
        self.call(TEMPLATE_GET, params).await
    }

    async fn proxy_get(&self, params: &ProxyGetParameters) -> Result<Vec<Proxy>> {
        self.call(PROXY_GET, params).await
    }

    async fn proxy_create(&self, params: &ProxyCreateParameters) -> Result<ProxyCreateResponse> {
        self.call(PROXY_CREATE, params).await
    }

    async fn proxy_delete(&self, ids: &[String]) -> Result<ProxyDeleteResponse> {
        self.call(PROXY_DELETE, ids).await
    }

    async fn token_create(&self, token: &Token) -> Result<TokenCreateResponse> {
        self.call(TOKEN_CREATE, token).await
    }

    async fn token_generate(&self, ids: &[String]) -> Result<Vec<TokenGenerateResponse>> {
        self.call(TOKEN_GENERATE, ids).await
    }

    async fn token_delete(&self, ids: &[String]) -> Result<TokenDeleteResponse> {
        self.call(TOKEN_DELETE, ids).await
    }

    async fn problem_get(&self, params: &ProblemGetParameters) -> Result<Vec<Problem>> {
        self.call(PROBLEM_GET, params).await
    }

    async fn api_version(&self) -> Result<String> {
        self.call(APIINFO_VERSION, &serde_json::json!({})).await
    }

    async fn logout(&self) -> Result<bool> {
        let ok: bool = self.call(USER_LOGOUT, &Vec::<String>::new()).await?;
        if ok {
            self.session().clear();
        }
        Ok(ok)
    }
}
