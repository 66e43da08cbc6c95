use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Serialize;

use crate::modules::identity::use_cases::authenticate::inbound::current_user::CurrentUserId;
use crate::modules::shift_requests::use_cases::create_submission::command::{
    CreateSubmission, ProposedEntry,
};
use crate::shared::infrastructure::gateway::{RequestId, SubmissionId};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateSubmissionResponse {
    pub id: SubmissionId,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUserId(user_id): CurrentUserId,
    request_id: Result<Path<RequestId>, PathRejection>,
    body: Result<Json<Vec<ProposedEntry>>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSubmissionResponse>), ApiError> {
    let Path(request_id) = request_id?;
    let Json(entries) = body?;
    let command = CreateSubmission {
        request_id,
        submitter_id: user_id,
        entries,
    };
    let id = state.create_submission.handle(command).await?;
    Ok((StatusCode::CREATED, Json(CreateSubmissionResponse { id })))
}
