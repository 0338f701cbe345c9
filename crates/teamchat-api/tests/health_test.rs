//! Integration tests for health probes.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_check() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_in_memory_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health/detailed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "in_memory");
}
