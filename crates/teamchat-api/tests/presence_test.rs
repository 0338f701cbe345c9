//! Integration tests for the presence endpoints.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_heartbeat_then_member_online() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let user = Uuid::new_v4();
    let member = app.join(ws, user);
    let token = app.token_for(user);

    let resp = app
        .request(
            "POST",
            &format!("/api/workspaces/{ws}/presence/heartbeat"),
            Some(&token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["data"]["member_id"], member.id.to_string());
    assert_eq!(resp.body["data"]["heartbeat_interval_ms"], 5000);

    let resp = app
        .request(
            "GET",
            &format!("/api/members/{}/presence", member.id),
            Some(&token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["online"], true);
}

#[tokio::test]
async fn test_heartbeat_without_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();

    let resp = app
        .request("POST", &format!("/api/workspaces/{ws}/presence/heartbeat"), None)
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.body["error"], "UNAUTHORIZED");

    let resp = app
        .request(
            "POST",
            &format!("/api/workspaces/{ws}/presence/heartbeat"),
            Some("garbage"),
        )
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_heartbeat_from_non_member_is_not_found() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let token = app.token_for(Uuid::new_v4());

    let resp = app
        .request(
            "POST",
            &format!("/api/workspaces/{ws}/presence/heartbeat"),
            Some(&token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_member_goes_offline_after_threshold() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let user = Uuid::new_v4();
    let member = app.join(ws, user);
    let token = app.token_for(user);

    app.request(
        "POST",
        &format!("/api/workspaces/{ws}/presence/heartbeat"),
        Some(&token),
    )
    .await;

    app.clock.advance(15_000);

    let resp = app
        .request(
            "GET",
            &format!("/api/members/{}/presence", member.id),
            Some(&token),
        )
        .await;
    assert_eq!(resp.body["data"]["online"], false);
}

#[tokio::test]
async fn test_clear_presence_always_succeeds() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let user = Uuid::new_v4();
    let member = app.join(ws, user);
    let token = app.token_for(user);

    app.request(
        "POST",
        &format!("/api/workspaces/{ws}/presence/heartbeat"),
        Some(&token),
    )
    .await;

    let resp = app
        .request("DELETE", &format!("/api/workspaces/{ws}/presence"), None)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(app.store.len(), 1);

    let resp = app
        .request(
            "DELETE",
            &format!("/api/workspaces/{ws}/presence"),
            Some(&token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(app.store.is_empty());

    let resp = app
        .request(
            "GET",
            &format!("/api/members/{}/presence", member.id),
            Some(&token),
        )
        .await;
    assert_eq!(resp.body["data"]["online"], false);
}

#[tokio::test]
async fn test_workspace_status_map() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
    let alice_m = app.join(ws, alice);
    let bob_m = app.join(ws, bob);
    let alice_token = app.token_for(alice);

    app.request(
        "POST",
        &format!("/api/workspaces/{ws}/presence/heartbeat"),
        Some(&alice_token),
    )
    .await;

    let resp = app
        .request(
            "GET",
            &format!("/api/workspaces/{ws}/presence"),
            Some(&alice_token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let map = resp.body["data"].as_object().expect("map");
    assert_eq!(map.len(), 1);
    assert_eq!(map[&alice_m.id.to_string()], true);
    assert!(!map.contains_key(&bob_m.id.to_string()));
}

#[tokio::test]
async fn test_workspace_status_empty_for_outsiders() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let user = Uuid::new_v4();
    app.join(ws, user);
    let token = app.token_for(user);

    app.request(
        "POST",
        &format!("/api/workspaces/{ws}/presence/heartbeat"),
        Some(&token),
    )
    .await;

    let resp = app
        .request("GET", &format!("/api/workspaces/{ws}/presence"), None)
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"], serde_json::json!({}));

    let outsider = app.token_for(Uuid::new_v4());
    let resp = app
        .request(
            "GET",
            &format!("/api/workspaces/{ws}/presence"),
            Some(&outsider),
        )
        .await;
    assert_eq!(resp.body["data"], serde_json::json!({}));
}

#[tokio::test]
async fn test_invalid_workspace_id_is_bad_request() {
    let app = helpers::TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let resp = app
        .request(
            "POST",
            "/api/workspaces/not-a-uuid/presence/heartbeat",
            Some(&token),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_is_accepted() {
    let app = helpers::TestApp::new();
    let ws = Uuid::new_v4();
    let user = Uuid::new_v4();
    let member = app.join(ws, user);
    let authorization = format!("bearer {}", app.token_for(user));

    let resp = app
        .request_with_authorization(
            "POST",
            &format!("/api/workspaces/{ws}/presence/heartbeat"),
            Some(&authorization),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["member_id"], member.id.to_string());
}
