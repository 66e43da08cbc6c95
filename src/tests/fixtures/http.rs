use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::Duration;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::identity::use_cases::authenticate::handler::DEFAULT_SESSION_TTL_SECONDS;
use crate::shared::infrastructure::gateway::in_memory::InMemoryGateway;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::identity::test_hashing;

pub fn test_state(gateway: InMemoryGateway) -> AppState {
    AppState::new(
        Arc::new(gateway),
        Arc::new(InMemorySessionStore::new()),
        test_hashing(),
        Duration::seconds(DEFAULT_SESSION_TTL_SECONDS),
    )
}

pub fn app(gateway: InMemoryGateway) -> Router {
    router(test_state(gateway))
}

/// Logs in and returns the `name=value` pair to send back as a Cookie header.
pub async fn login_cookie(app: &Router, login_id: &str, password: &str) -> String {
    let body = serde_json::json!({ "login_id": login_id, "password": password }).to_string();
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/login")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "login as {login_id} failed");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("missing set-cookie");
    set_cookie
        .split(';')
        .next()
        .expect("empty set-cookie")
        .to_string()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
