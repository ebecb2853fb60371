use super::*;
use axum::Router;
use axum::http::{Method, Uri};
use axum::routing::get;
use serde_json::Value;
use std::net::SocketAddr;

use crate::config::GatewayConfig;
use crate::routes::api_routes;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Upstream that reports exactly what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "content_type": headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}

fn gateway_state(backend: &str) -> AppState {
    let backend = backend.to_owned();
    let config = GatewayConfig::from_lookup(move |key| (key == "BACKEND_URL").then(|| backend.clone())).unwrap();
    AppState::new(&config).unwrap()
}

async fn gateway_for(upstream: Router) -> String {
    let backend = serve(upstream).await;
    let gateway = serve(api_routes(gateway_state(&format!("http://{backend}/")))).await;
    format!("http://{gateway}")
}

#[test]
fn upstream_url_appends_path_and_query() {
    assert_eq!(
        upstream_url("http://backend:8000", "/api/notices?limit=5"),
        "http://backend:8000/api/notices?limit=5"
    );
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Body("too large".into()).status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn form_post_is_forwarded_verbatim() {
    let base = gateway_for(Router::new().fallback(echo)).await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("message=%EC%95%88%EB%85%95&session_id=session_abc")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let seen: Value = resp.json().await.unwrap();
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["path"], "/api/chat");
    assert_eq!(seen["content_type"], "application/x-www-form-urlencoded");
    assert_eq!(seen["body"], "message=%EC%95%88%EB%85%95&session_id=session_abc");
}

#[tokio::test]
async fn method_path_and_query_are_preserved() {
    let base = gateway_for(Router::new().fallback(echo)).await;
    let client = reqwest::Client::new();

    let seen: Value = client
        .delete(format!("{base}/api/chat/session/session_abc?force=1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["method"], "DELETE");
    assert_eq!(seen["path"], "/api/chat/session/session_abc");
    assert_eq!(seen["query"], "force=1");

    let seen: Value = client
        .put(format!("{base}/api/notices/42"))
        .body("title=t")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["method"], "PUT");
    assert_eq!(seen["path"], "/api/notices/42");
}

#[tokio::test]
async fn generate_notice_route_is_forwarded() {
    let base = gateway_for(Router::new().fallback(echo)).await;

    let seen: Value = reqwest::Client::new()
        .post(format!("{base}/generate-notice"))
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=xyz")
        .body("--xyz--\r\n")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["path"], "/generate-notice");
    assert_eq!(seen["content_type"], "multipart/form-data; boundary=xyz");
}

#[tokio::test]
async fn upstream_error_status_and_body_are_relayed() {
    let upstream = Router::new().route(
        "/api/notices/{id}",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "detail": "공지를 찾을 수 없습니다." }))) }),
    );
    let base = gateway_for(upstream).await;

    let resp = reqwest::get(format!("{base}/api/notices/missing")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "공지를 찾을 수 없습니다.");
}

#[tokio::test]
async fn unreachable_backend_answers_502_json() {
    // Reserve a port, then close it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let gateway = serve(api_routes(gateway_state(&format!("http://{dead}")))).await;
    let resp = reqwest::get(format!("http://{gateway}/api/notices")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["detail"].as_str().unwrap().starts_with("backend unavailable"));
}

#[tokio::test]
async fn healthz_is_answered_locally() {
    let gateway = serve(api_routes(gateway_state("http://127.0.0.1:9"))).await;
    let resp = reqwest::get(format!("http://{gateway}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
