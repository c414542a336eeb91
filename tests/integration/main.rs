//! Integration tests for the dashboard API.
//!
//! Each test binds a real listener on an ephemeral local port and talks to
//! it over HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use pretty_assertions::assert_eq;
use reqwest::header;
use tokio::net::TcpListener;

use eth_dashboard::api::{create_router, CorsPolicy, HealthResponse, HealthStatus};
use eth_dashboard::probe::probe;
use eth_dashboard::{AppError, Config};

/// Serve `router` on 127.0.0.1 and return its address.
async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_app() -> SocketAddr {
    spawn(create_router(&CorsPolicy::default()).unwrap()).await
}

#[tokio::test]
async fn health_returns_healthy_over_http() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let requests = (0..16).map(|_| {
        let client = client.clone();
        async move {
            let response = client
                .get(format!("http://{addr}/health"))
                .send()
                .await
                .unwrap();
            (response.status(), response.json::<HealthResponse>().await.unwrap())
        }
    });

    let handles: Vec<_> = requests.map(tokio::spawn).collect();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body.status, HealthStatus::Healthy);
    }
}

#[tokio::test]
async fn configured_origin_is_granted_over_http() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let allowed = client
        .get(format!("http://{addr}/health"))
        .header(header::ORIGIN, "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(allowed.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let denied = client
        .get(format!("http://{addr}/health"))
        .header(header::ORIGIN, "http://localhost:4000")
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), reqwest::StatusCode::OK);
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn router_built_from_environment_config_honours_extra_origins() {
    let config = Config::from_vars(vec![(
        "CORS_ALLOWED_ORIGINS".to_string(),
        "http://localhost:3000,https://dash.example.com".to_string(),
    )])
    .unwrap();
    config.validate().unwrap();
    let addr = spawn(create_router(&config.cors_policy()).unwrap()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/health"))
        .header(header::ORIGIN, "https://dash.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://dash.example.com"
    );
}

#[tokio::test]
async fn unknown_path_is_not_found_over_http() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/metrics")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn probe_accepts_healthy_service() {
    let addr = spawn_app().await;

    let response = probe(&format!("http://{addr}/"), Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(response, HealthResponse::healthy());
}

#[tokio::test]
async fn probe_rejects_error_status() {
    let router = Router::new().route(
        "/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let addr = spawn(router).await;

    let err = probe(&format!("http://{addr}"), Duration::from_secs(5))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Unhealthy { .. }));
}

#[tokio::test]
async fn probe_rejects_unexpected_body() {
    let router = Router::new().route(
        "/health",
        get(|| async { axum::Json(serde_json::json!({ "status": "degraded" })) }),
    );
    let addr = spawn(router).await;

    let err = probe(&format!("http://{addr}"), Duration::from_secs(5))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Http(_)));
}
