use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::shared::infrastructure::gateway::UserId;
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

pub const SESSION_COOKIE: &str = "login_session";

/// The user bound to the request's session cookie. Rejects with 401 when the
/// cookie is absent, unknown or expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUserId(pub UserId);

impl FromRequestParts<AppState> for CurrentUserId {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());
        state
            .session_gate
            .resolve_user_id(token)
            .await
            .map(CurrentUserId)
            .ok_or(ApiError::Unauthenticated)
    }
}
