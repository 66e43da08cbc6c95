use anyhow::Context;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::identity::use_cases::authenticate::inbound::http as authenticate_http;
use crate::modules::shift_requests::use_cases::create_request::inbound::http as create_request_http;
use crate::modules::shift_requests::use_cases::create_submission::inbound::http as create_submission_http;
use crate::modules::shift_requests::use_cases::find_requests::inbound::http as find_requests_http;
use crate::modules::shift_requests::use_cases::find_submissions::inbound::http as find_submissions_http;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/login", post(authenticate_http::login))
        .route(
            "/session",
            get(authenticate_http::session).delete(authenticate_http::logout),
        )
        .route(
            "/requests",
            get(find_requests_http::list).post(create_request_http::handle),
        )
        .route("/requests/{id}", get(find_requests_http::show))
        .route(
            "/requests/{id}/submissions",
            get(find_submissions_http::list).post(create_submission_http::handle),
        )
        .route(
            "/requests/{id}/submissions/mine",
            get(find_submissions_http::mine),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Lets the browser front end at `frontend_url` call the API with its cookie.
pub fn cors_layer(frontend_url: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(frontend_url)
        .with_context(|| format!("FRONTEND_URL is not a valid origin: {frontend_url:?}"))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
