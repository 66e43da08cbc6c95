use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::modules::identity::core::user::User;
use crate::modules::identity::use_cases::authenticate::inbound::current_user::{
    CurrentUserId, SESSION_COOKIE,
};
use crate::modules::identity::use_cases::authorize::handler::find_user;
use crate::shared::core::primitives::DateTime;
use crate::shared::infrastructure::gateway::{StorageError, UserId};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserSessionInfo {
    pub id: UserId,
    pub name: String,
    pub roles: Vec<&'static str>,
    pub created_at: DateTime,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserSessionInfo,
}

impl From<User> for SessionResponse {
    fn from(user: User) -> Self {
        SessionResponse {
            user: UserSessionInfo {
                id: user.id,
                roles: user.capabilities.names(),
                name: user.name,
                created_at: user.created_at,
            },
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let Json(body) = body?;
    let session = state
        .session_gate
        .login(&body.login_id, &body.password)
        .await?;
    let user = find_user(&*state.gateway, session.user_id)
        .await
        .map_err(|e| ApiError::Auth(e.into()))?;
    let max_age = time::Duration::seconds(state.session_gate.ttl().num_seconds());
    let cookie = Cookie::build((SESSION_COOKIE, session.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age);
    Ok((jar.add(cookie), Json(user.into())))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), ApiError> {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned());
    state.session_gate.logout(token.as_deref()).await?;
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    Ok((jar, StatusCode::NO_CONTENT))
}

pub async fn session(
    State(state): State<AppState>,
    CurrentUserId(user_id): CurrentUserId,
) -> Result<Json<SessionResponse>, ApiError> {
    match find_user(&*state.gateway, user_id).await {
        Ok(user) => Ok(Json(user.into())),
        Err(StorageError::NotFound { .. }) => Err(ApiError::Unauthenticated),
        Err(e) => Err(ApiError::Auth(e.into())),
    }
}
