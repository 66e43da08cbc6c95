use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;

use crate::modules::identity::core::user::User;
use crate::modules::identity::use_cases::authenticate::inbound::current_user::CurrentUserId;
use crate::modules::shift_requests::core::request::Request;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::{RequestId, UserId};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: UserId,
    pub name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub id: RequestId,
    pub creator: UserInfo,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub deadline: DateTime,
    pub created_at: DateTime,
}

impl From<&Request> for RequestInfo {
    fn from(request: &Request) -> Self {
        RequestInfo {
            id: request.id,
            creator: UserInfo::from(&request.creator),
            start_date: request.start_date,
            end_date: request.end_date,
            deadline: request.deadline,
            created_at: request.created_at,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUserId,
) -> Result<Json<Vec<RequestInfo>>, ApiError> {
    let requests = state.find_requests.all().await?;
    Ok(Json(requests.iter().map(RequestInfo::from).collect()))
}

pub async fn show(
    State(state): State<AppState>,
    _user: CurrentUserId,
    id: Result<Path<RequestId>, PathRejection>,
) -> Result<Json<RequestInfo>, ApiError> {
    let Path(id) = id?;
    let request = state.find_requests.by_id(id).await?;
    Ok(Json(RequestInfo::from(&request)))
}
