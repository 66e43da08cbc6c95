use crate::modules::identity::core::capabilities::Capability;
use crate::modules::identity::use_cases::authorize::handler::require_capability;
use crate::modules::shift_requests::use_cases::create_submission::command::CreateSubmission;
use crate::modules::shift_requests::use_cases::create_submission::decide::decide_create_submission;
use crate::modules::shift_requests::use_cases::create_submission::decision::Decision;
use crate::modules::shift_requests::use_cases::find_requests::handler::load_request;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::gateway::{Gateway, StorageError, SubmissionId};
use std::sync::Arc;
use tracing::info;

pub struct CreateSubmissionHandler<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G> CreateSubmissionHandler<G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, command: CreateSubmission) -> Result<SubmissionId, ApplicationError> {
        require_capability(&*self.gateway, command.submitter_id, Capability::Employee).await?;
        let request = load_request(&*self.gateway, command.request_id).await?;
        let existing = self
            .gateway
            .get_submission_by_request_and_submitter(command.request_id, command.submitter_id)
            .await?;

        let entries = match decide_create_submission(existing.is_some(), &request, &command.entries)
        {
            Decision::Accepted { entries } => entries,
            Decision::Rejected { reason } => return Err(reason.into()),
        };
        let entry_count = entries.len();

        // A concurrent submission for the same pair loses at the store.
        let id = self
            .gateway
            .create_submission_with_entries(command.submitter_id, command.request_id, entries)
            .await
            .map_err(|e| match e {
                StorageError::UniqueViolation(_) => ApplicationError::AlreadySubmitted,
                other => other.into(),
            })?;
        info!(
            submission_id = id,
            request_id = command.request_id,
            submitter_id = command.submitter_id,
            entry_count,
            "submission created"
        );
        Ok(id)
    }
}
