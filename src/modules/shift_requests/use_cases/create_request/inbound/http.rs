use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::modules::identity::use_cases::authenticate::inbound::current_user::CurrentUserId;
use crate::modules::shift_requests::use_cases::create_request::command::CreateRequest;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::{RequestId, UserId};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateRequestBody {
    pub start_date: String,
    pub end_date: String,
    pub deadline: String,
}

#[derive(Serialize)]
pub struct CreateRequestResponse {
    pub id: RequestId,
}

impl CreateRequestBody {
    fn into_command(self, creator_id: UserId) -> Result<CreateRequest, ApiError> {
        let field = |name: &str, shape: &str| {
            ApiError::BadRequest(format!("{name} must be formatted as {shape}"))
        };
        Ok(CreateRequest {
            creator_id,
            start_date: DateOnly::parse(&self.start_date)
                .map_err(|_| field("start_date", "YYYY-MM-DD"))?,
            end_date: DateOnly::parse(&self.end_date)
                .map_err(|_| field("end_date", "YYYY-MM-DD"))?,
            deadline: DateTime::parse(&self.deadline)
                .map_err(|_| field("deadline", "YYYY-MM-DD HH:MM:SS"))?,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUserId(user_id): CurrentUserId,
    body: Result<Json<CreateRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRequestResponse>), ApiError> {
    let Json(body) = body?;
    let command = body.into_command(user_id)?;
    let id = state.create_request.handle(command).await?;
    Ok((StatusCode::CREATED, Json(CreateRequestResponse { id })))
}
