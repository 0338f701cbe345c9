//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use teamchat_api::{AppState, build_router};
use teamchat_auth::jwt::{JwtDecoder, JwtEncoder};
use teamchat_core::clock::ManualClock;
use teamchat_core::config::AppConfig;
use teamchat_database::memory::{MemoryMembershipDirectory, MemoryPresenceStore};
use teamchat_entity::member::Member;
use teamchat_service::presence::PresenceService;

const TEST_CONFIG: &str = r#"
[database]
url = "postgres://unused@localhost/teamchat_test"

[auth]
jwt_secret = "integration-test-secret"

[logging]
format = "pretty"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Presence records, for direct assertions
    pub store: Arc<MemoryPresenceStore>,
    /// Membership directory, for seeding members
    pub directory: Arc<MemoryMembershipDirectory>,
    /// Controllable clock
    pub clock: Arc<ManualClock>,
    encoder: JwtEncoder,
}

/// Parsed test response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body (`Value::Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application on in-memory stores.
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to load test config");

        let store = Arc::new(MemoryPresenceStore::new());
        let directory = Arc::new(MemoryMembershipDirectory::new());
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));

        let presence_service = Arc::new(PresenceService::new(
            store.clone(),
            directory.clone(),
            clock.clone(),
            &config.presence,
        ));

        let state = AppState {
            auth_resolver: Arc::new(JwtDecoder::new(&config.auth)),
            db_pool: None,
            presence_service,
            config: Arc::new(config.clone()),
        };

        Self {
            router: build_router(state),
            store,
            directory,
            clock,
            encoder: JwtEncoder::new(&config.auth),
        }
    }

    /// Add a user to a workspace.
    pub fn join(&self, workspace_id: Uuid, user_id: Uuid) -> Member {
        self.directory.join(workspace_id, user_id)
    }

    /// Mint a bearer token for a user.
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.encoder
            .generate_access_token(user_id)
            .expect("Failed to mint token")
            .0
    }

    /// Make an HTTP request against the router.
    pub async fn request(&self, method: &str, uri: &str, token: Option<&str>) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_authorization(method, uri, authorization.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value.
    pub async fn request_with_authorization(
        &self,
        method: &str,
        uri: &str,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
