//! Test harness that drives the real router over in-memory dependencies.
//!
//! The store, NATS publisher and job queue are the doubles from
//! `kernel::test_dependencies`; requests go through the full middleware
//! stack via `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use marketplace_core::common::{ProfileId, UserId};
use marketplace_core::domains::auth::JwtService;
use marketplace_core::kernel::{MockMarketplaceStore, TestDependencies, TestNats};
use marketplace_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

const JWT_SECRET: &str = "test-jwt-secret";
const JWT_ISSUER: &str = "marketplace-test";

pub struct TestHarness {
    pub deps: TestDependencies,
    jwt_service: Arc<JwtService>,
    router: Router,
}

impl TestHarness {
    pub fn new(store: MockMarketplaceStore) -> Self {
        Self::with_deps(TestDependencies::new().mock_store(store))
    }

    /// Harness whose event publisher fails every publish.
    pub fn with_failing_nats(store: MockMarketplaceStore) -> Self {
        Self::with_deps(
            TestDependencies::new()
                .mock_store(store)
                .mock_nats(TestNats::failing("no servers available")),
        )
    }

    pub fn with_deps(deps: TestDependencies) -> Self {
        // Uses try_init() so parallel tests don't panic on a second init.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let jwt_service = Arc::new(JwtService::new(JWT_SECRET, JWT_ISSUER.to_string()));
        // Requests carry X-Forwarded-For instead of a socket peer address.
        let router = build_app(
            deps.clone().into_server_deps(jwt_service.clone()),
            &[],
            true,
        )
        .expect("router builds");

        Self {
            deps,
            jwt_service,
            router,
        }
    }

    /// Bearer token for a user acting as `profile_id`.
    pub fn token_for(&self, user_id: UserId, profile_id: ProfileId) -> String {
        self.jwt_service
            .create_token(user_id.into_uuid(), profile_id.into_uuid())
            .expect("token")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, path, token, Body::empty()).await
    }

    pub async fn post_json(&self, path: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, path, token, Body::from(body.to_string()))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            // rate limiter keys on the client IP
            .header("x-forwarded-for", "127.0.0.1");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).expect("request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("JSON body")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}
