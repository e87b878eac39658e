//! Mock API tests for the zbx client.
//!
//! These tests use wiremock to simulate the remote endpoint and exercise
//! the client without network access or real credentials. Every JSON-RPC
//! call is a POST to the same path, so mocks discriminate on the `method`
//! field of the request body.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zbx_core::{
    ConfigError, Error, GetParameters, Host, HostGetParameters, HostGroup, HostInterface,
    ManagementApi, TransportError,
};
use zbx_rpc::{Client, ClientConfig};

/// Client configured for user/password login against the mock server.
fn user_pass_client(server: &MockServer) -> Client {
    Client::new(ClientConfig {
        url: server.uri(),
        username: Some("Admin".to_string()),
        password: Some("zabbix".to_string()),
        ..Default::default()
    })
    .unwrap()
}

/// Client configured with a static API token.
fn token_client(server: &MockServer) -> Client {
    Client::new(ClientConfig {
        url: server.uri(),
        api_token: Some("static-api-token".to_string()),
        ..Default::default()
    })
    .unwrap()
}

fn result_response(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": 1,
    }))
}

fn error_response(code: i64, message: &str, data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "error": {"code": code, "message": message, "data": data},
        "id": 1,
    }))
}

/// Number of `user.login` calls the server has seen.
async fn count_logins(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| {
            serde_json::from_slice::<serde_json::Value>(&request.body)
                .map(|body| body["method"] == "user.login")
                .unwrap_or(false)
        })
        .count()
}

fn sample_host() -> Host {
    Host {
        host: Some("test-host".to_string()),
        description: Some("Test host".to_string()),
        interfaces: vec![HostInterface {
            interface_type: 1,
            main: 1,
            use_ip: 1,
            ip: "127.0.0.1".to_string(),
            port: "10050".to_string(),
            ..Default::default()
        }],
        groups: vec![HostGroup {
            group_id: Some("2".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn construction_requires_exactly_one_auth_mode() {
    let url = "http://127.0.0.1:10051/api_jsonrpc.php".to_string();

    let neither = Client::new(ClientConfig {
        url: url.clone(),
        ..Default::default()
    });
    assert!(matches!(
        neither,
        Err(Error::Config(ConfigError::MissingCredentials))
    ));

    let both = Client::new(ClientConfig {
        url: url.clone(),
        username: Some("Admin".to_string()),
        password: Some("zabbix".to_string()),
        api_token: Some("93a1a67d".to_string()),
        ..Default::default()
    });
    assert!(matches!(
        both,
        Err(Error::Config(ConfigError::ConflictingCredentials))
    ));

    assert!(
        Client::new(ClientConfig {
            url: url.clone(),
            username: Some("Admin".to_string()),
            password: Some("zabbix".to_string()),
            ..Default::default()
        })
        .is_ok()
    );

    assert!(
        Client::new(ClientConfig {
            url,
            api_token: Some("93a1a67d".to_string()),
            ..Default::default()
        })
        .is_ok()
    );
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn login_installs_bearer_and_dispatch_carries_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "user.login",
            "params": {"username": "Admin", "password": "zabbix"},
        })))
        .respond_with(result_response(json!("tok-1")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(
            json!({"method": "host.get", "params": {"output": "extend"}}),
        ))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(result_response(json!([
            {"hostid": "10084", "host": "web-01", "status": "0"},
        ])))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client.authenticate().await.unwrap();
    assert_eq!(client.bearer_token().as_str(), "tok-1");

    let params = HostGetParameters {
        common: GetParameters {
            output: Some(json!("extend")),
            ..Default::default()
        },
        ..Default::default()
    };
    let hosts = client.host_get(&params).await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].host_id.as_deref(), Some("10084"));
    // "0" projected onto the numeric status field
    assert_eq!(hosts[0].status, Some(0));
}

#[tokio::test]
async fn failed_login_keeps_previous_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result_response(json!("tok-1")))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(error_response(
            -32602,
            "Invalid params.",
            "Incorrect user name or password or account is temporarily blocked.",
        ))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client.authenticate().await.unwrap();
    assert_eq!(client.bearer_token().as_str(), "tok-1");

    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    // The stale credential survives the failed refresh.
    assert_eq!(client.bearer_token().as_str(), "tok-1");
}

#[tokio::test]
async fn static_token_mode_never_calls_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "apiinfo.version"})))
        .and(header("authorization", "Bearer static-api-token"))
        .respond_with(result_response(json!("7.2.3")))
        .mount(&server)
        .await;

    let client = token_client(&server);
    client.authenticate().await.unwrap();
    assert_eq!(client.bearer_token().as_str(), "static-api-token");

    let version = client.api_version().await.unwrap();
    assert_eq!(version, "7.2.3");

    assert_eq!(count_logins(&server).await, 0);
}

#[tokio::test]
async fn logout_clears_bearer_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result_response(json!("tok-1")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.logout"})))
        .respond_with(result_response(json!(true)))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client.authenticate().await.unwrap();
    assert!(!client.bearer_token().is_empty());

    assert!(client.logout().await.unwrap());
    assert!(client.bearer_token().is_empty());
}

// ============================================================================
// Token refresher
// ============================================================================

#[tokio::test]
async fn refresher_reauthenticates_and_stop_is_a_barrier() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result_response(json!("tok-refreshed")))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client
        .start_token_refresher(Duration::from_millis(25))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    client.stop_token_refresher().await;

    let at_stop = count_logins(&server).await;
    assert!(at_stop >= 1, "expected at least one background refresh");
    assert_eq!(client.bearer_token().as_str(), "tok-refreshed");

    // stop() joins the task, so the count is frozen even a full period later.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(count_logins(&server).await, at_stop);
}

#[tokio::test]
async fn refresher_rejects_double_start_and_supports_restart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result_response(json!("tok-1")))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client
        .start_token_refresher(Duration::from_millis(50))
        .await
        .unwrap();

    let err = client
        .start_token_refresher(Duration::from_millis(50))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::RefresherRunning)
    ));

    client.stop_token_refresher().await;
    // Stopping again is a no-op.
    client.stop_token_refresher().await;

    client
        .start_token_refresher(Duration::from_millis(50))
        .await
        .unwrap();
    client.stop_token_refresher().await;
}

#[tokio::test]
async fn refresh_interval_must_undercut_bearer_lifetime() {
    let client = Client::new(ClientConfig {
        url: "http://127.0.0.1:10051/api_jsonrpc.php".to_string(),
        username: Some("Admin".to_string()),
        password: Some("zabbix".to_string()),
        bearer_lifetime: Some(Duration::from_secs(600)),
        ..Default::default()
    })
    .unwrap();

    // 360s + 300s margin exceeds the 600s lifetime.
    let err = client
        .start_token_refresher(Duration::from_secs(360))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::RefreshIntervalTooLong { .. })
    ));

    // 240s leaves the margin intact.
    client
        .start_token_refresher(Duration::from_secs(240))
        .await
        .unwrap();
    client.stop_token_refresher().await;
}

#[tokio::test]
async fn refresh_failures_reach_the_error_callback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let client = Client::new(ClientConfig {
        url: server.uri(),
        username: Some("Admin".to_string()),
        password: Some("zabbix".to_string()),
        on_refresh_error: Some(Arc::new(move |err| {
            sink.lock().unwrap().push(err.to_string());
        })),
        ..Default::default()
    })
    .unwrap();

    client
        .start_token_refresher(Duration::from_millis(25))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    client.stop_token_refresher().await;

    let errors = seen.lock().unwrap();
    assert!(!errors.is_empty(), "expected failed ticks to be reported");
    assert!(errors[0].contains("authentication"));
}

// ============================================================================
// Dispatch and error handling
// ============================================================================

#[tokio::test]
async fn api_error_takes_precedence_over_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "host.create"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "result": {"hostids": ["10501"]},
            "error": {
                "code": -32500,
                "message": "Application error.",
                "data": "No permissions to referred object or it does not exist!",
            },
            "id": 1,
        })))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    let err = client.host_create(&sample_host()).await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.code, -32500);
            assert_eq!(api.message, "Application error.");
            assert_eq!(
                api.data,
                "No permissions to referred object or it does not exist!"
            );
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "host.create"})))
        .respond_with(error_response(
            -32602,
            "Invalid params.",
            r#"Incorrect value for field "port": cannot be empty."#,
        ))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    // Host with an interface missing its port.
    let mut host = sample_host();
    host.interfaces[0].port = String::new();

    let err = client.host_create(&host).await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.code, -32602);
            assert!(api.data.contains("port"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_then_delete_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "user.login"})))
        .respond_with(result_response(json!("tok-1")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "host.create",
            "params": {"host": "test-host"},
        })))
        .respond_with(result_response(json!({"hostids": ["10501"]})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "host.delete",
            "params": ["10501"],
        })))
        .respond_with(result_response(json!({"hostids": ["10501"]})))
        .mount(&server)
        .await;

    let client = user_pass_client(&server);
    client.authenticate().await.unwrap();

    let created = client.host_create(&sample_host()).await.unwrap();
    assert_eq!(created.host_ids, vec!["10501".to_string()]);

    let deleted = client.host_delete(&created.host_ids).await.unwrap();
    assert_eq!(deleted.host_ids, created.host_ids);
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = token_client(&server);
    let err = client.api_version().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Status { code: 503 })
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = token_client(&server);
    let err = client.api_version().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn incompatible_result_shape_is_a_projection_error() {
    let server = MockServer::start().await;

    // host.get is expected to return an array; hand back a scalar.
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({"method": "host.get"})))
        .respond_with(result_response(json!("unexpected")))
        .mount(&server)
        .await;

    let client = token_client(&server);
    let err = client
        .host_get(&HostGetParameters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Projection(_)));
}
