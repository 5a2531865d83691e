//! Integration tests for the HTTP activation checker against a local server.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::{Value, json};

use yatori_core::config::link::LinkConfig;
use yatori_core::traits::ActivationChecker;
use yatori_core::types::ActivationRequest;
use yatori_core::types::activation::CHECK_FAILED_STATUS;
use yatori_link::{HttpActivationChecker, PaymentLinkBuilder, PaymentRequest};

const ACTIVATED: &str = "GvCoHGGBR97Yphzc6SrRycZyS31oUYBM8m9hLRtJT7r5";
const FRESH: &str = "4M4fd9JSEgrzbCko9uABWN1E1xhjxPsmMSt6KHf3ZjQ8";
const PATH: &str = "/is-usdc-acct-activated";

/// Serve `app` on an ephemeral port and return the endpoint URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}{PATH}")
}

async fn activation_handler(Json(request): Json<ActivationRequest>) -> Json<Value> {
    let is_activated = request.address == ACTIVATED && request.network == "mainnet-beta";
    Json(json!({ "isActivated": is_activated, "status": "ok" }))
}

/// Client that ignores proxy environment variables so loopback stays local.
fn checker(endpoint: &str, timeout: Duration) -> HttpActivationChecker {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .expect("client");
    HttpActivationChecker::with_client(client, endpoint)
}

#[tokio::test]
async fn test_reports_activated_account() {
    let endpoint = spawn_server(Router::new().route(PATH, post(activation_handler))).await;
    let checker = checker(&endpoint, Duration::from_secs(5));

    let status = checker.check(ACTIVATED, "mainnet-beta").await;
    assert!(status.is_activated);
    assert_eq!(status.status.as_deref(), Some("ok"));
    assert!(!status.is_failure());

    let status = checker.check(FRESH, "mainnet-beta").await;
    assert!(!status.is_activated);
    assert!(!status.is_failure());
}

#[tokio::test]
async fn test_network_is_sent() {
    let endpoint = spawn_server(Router::new().route(PATH, post(activation_handler))).await;
    let status = checker(&endpoint, Duration::from_secs(5))
        .check(ACTIVATED, "devnet")
        .await;
    assert!(!status.is_activated);
}

#[tokio::test]
async fn test_missing_flag_reads_as_not_activated() {
    let app = Router::new().route(PATH, post(|| async { Json(json!({ "status": "unknown" })) }));
    let endpoint = spawn_server(app).await;

    let status = checker(&endpoint, Duration::from_secs(5))
        .check(ACTIVATED, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(!status.is_failure());
}

#[tokio::test]
async fn test_server_error_is_absorbed() {
    let app = Router::new().route(PATH, post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let endpoint = spawn_server(app).await;

    let status = checker(&endpoint, Duration::from_secs(5))
        .check(ACTIVATED, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(status.is_failure());
    assert_eq!(status.status.as_deref(), Some(CHECK_FAILED_STATUS));
}

#[tokio::test]
async fn test_malformed_body_is_absorbed() {
    let app = Router::new().route(PATH, post(|| async { "definitely not json" }));
    let endpoint = spawn_server(app).await;

    let status = checker(&endpoint, Duration::from_secs(5))
        .check(ACTIVATED, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(status.is_failure());
}

#[tokio::test]
async fn test_numeric_status_keeps_activation_flag() {
    let app = Router::new().route(
        PATH,
        post(|| async { Json(json!({ "isActivated": true, "status": 200 })) }),
    );
    let endpoint = spawn_server(app).await;
    let checker = Arc::new(checker(&endpoint, Duration::from_secs(5)));

    let status = checker.check(ACTIVATED, "mainnet-beta").await;
    assert!(status.is_activated);
    assert_eq!(status.status.as_deref(), Some("200"));
    assert!(!status.is_failure());

    let url = PaymentLinkBuilder::new(LinkConfig::default(), checker)
        .create_link(&PaymentRequest::new(ACTIVATED, 5.0))
        .await
        .expect("link");
    assert!(url.contains("token=usdcBasic"));
}

#[tokio::test]
async fn test_remote_error_key_is_not_a_failed_check() {
    let app = Router::new().route(
        PATH,
        post(|| async { Json(json!({ "isActivated": false, "error": { "code": 7 } })) }),
    );
    let endpoint = spawn_server(app).await;

    let status = checker(&endpoint, Duration::from_secs(5))
        .check(FRESH, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(!status.is_failure());
    assert_eq!(status.error, None);
}

#[tokio::test]
async fn test_timeout_is_absorbed() {
    let app = Router::new().route(
        PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "isActivated": true }))
        }),
    );
    let endpoint = spawn_server(app).await;

    let status = checker(&endpoint, Duration::from_millis(200))
        .check(ACTIVATED, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(status.is_failure());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_absorbed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let status = checker(&format!("http://{addr}{PATH}"), Duration::from_secs(2))
        .check(ACTIVATED, "mainnet-beta")
        .await;
    assert!(!status.is_activated);
    assert!(status.error.is_some());
}

#[tokio::test]
async fn test_builder_end_to_end() {
    let endpoint = spawn_server(Router::new().route(PATH, post(activation_handler))).await;
    let builder = PaymentLinkBuilder::new(
        LinkConfig::default(),
        Arc::new(checker(&endpoint, Duration::from_secs(5))),
    );

    let basic = builder
        .create_link(&PaymentRequest::new(ACTIVATED, 5.0))
        .await
        .expect("link");
    assert!(basic.contains(&format!("token=usdcBasic&to={ACTIVATED}&amount=5.00")));

    let create = builder
        .create_link(&PaymentRequest::new(FRESH, 5.0))
        .await
        .expect("link");
    assert!(create.contains(&format!("token=usdcCreate&to={FRESH}&amount=5.00")));
}
