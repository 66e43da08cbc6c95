use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;

use crate::modules::identity::use_cases::authenticate::inbound::current_user::CurrentUserId;
use crate::modules::shift_requests::core::submission::{Entry, Submission};
use crate::modules::shift_requests::use_cases::find_requests::inbound::http::UserInfo;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::{EntryId, RequestId, SubmissionId};
use crate::shell::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct EntryInfo {
    pub id: EntryId,
    pub date: DateOnly,
    pub hour: u8,
}

#[derive(Debug, Serialize)]
pub struct SubmissionInfo {
    pub id: SubmissionId,
    pub request_id: RequestId,
    pub submitter: UserInfo,
    pub entries: Vec<EntryInfo>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<&Entry> for EntryInfo {
    fn from(entry: &Entry) -> Self {
        EntryInfo {
            id: entry.id,
            date: entry.date,
            hour: entry.hour,
        }
    }
}

impl From<&Submission> for SubmissionInfo {
    fn from(submission: &Submission) -> Self {
        SubmissionInfo {
            id: submission.id,
            request_id: submission.request_id,
            submitter: UserInfo::from(&submission.submitter),
            entries: submission.entries.iter().map(EntryInfo::from).collect(),
            created_at: submission.created_at,
            updated_at: submission.updated_at,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUserId,
    request_id: Result<Path<RequestId>, PathRejection>,
) -> Result<Json<Vec<SubmissionInfo>>, ApiError> {
    let Path(request_id) = request_id?;
    let submissions = state.find_submissions.by_request(request_id).await?;
    Ok(Json(submissions.iter().map(SubmissionInfo::from).collect()))
}

/// The caller's own submission, or `null`.
pub async fn mine(
    State(state): State<AppState>,
    CurrentUserId(user_id): CurrentUserId,
    request_id: Result<Path<RequestId>, PathRejection>,
) -> Result<Json<Option<SubmissionInfo>>, ApiError> {
    let Path(request_id) = request_id?;
    let submission = state
        .find_submissions
        .by_request_and_submitter(request_id, user_id)
        .await?;
    Ok(Json(submission.as_ref().map(SubmissionInfo::from)))
}
