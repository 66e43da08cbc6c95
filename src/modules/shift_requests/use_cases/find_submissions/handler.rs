use crate::modules::identity::core::capabilities::Capability;
use crate::modules::identity::use_cases::authorize::handler::{find_user, require_capability};
use crate::modules::shift_requests::core::submission::Submission;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::gateway::{Gateway, RequestId, SubmissionRecord, UserId};
use std::sync::Arc;

pub struct FindSubmissionsHandler<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G> FindSubmissionsHandler<G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    async fn hydrate(&self, record: SubmissionRecord) -> Result<Submission, ApplicationError> {
        let submitter = find_user(&*self.gateway, record.submitter_id).await?;
        let entries = self.gateway.get_entries_by_submission_id(record.id).await?;
        Ok(Submission::from_record(record, submitter, entries)?)
    }

    pub async fn by_request(
        &self,
        request_id: RequestId,
    ) -> Result<Vec<Submission>, ApplicationError> {
        self.gateway.get_request_by_id(request_id).await?;
        let records = self.gateway.get_submissions_by_request_id(request_id).await?;
        let mut submissions = Vec::with_capacity(records.len());
        for record in records {
            submissions.push(self.hydrate(record).await?);
        }
        Ok(submissions)
    }

    /// `None` when the employee has not answered the request yet.
    pub async fn by_request_and_submitter(
        &self,
        request_id: RequestId,
        submitter_id: UserId,
    ) -> Result<Option<Submission>, ApplicationError> {
        self.gateway.get_request_by_id(request_id).await?;
        require_capability(&*self.gateway, submitter_id, Capability::Employee).await?;
        match self
            .gateway
            .get_submission_by_request_and_submitter(request_id, submitter_id)
            .await?
        {
            Some(record) => Ok(Some(self.hydrate(record).await?)),
            None => Ok(None),
        }
    }
}
