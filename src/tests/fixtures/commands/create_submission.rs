// Builder for CreateSubmission commands. Defaults to employee 1 answering
// request 1 with 09:00 on June 1st and 10:00 on June 2nd.

use crate::modules::shift_requests::use_cases::create_submission::command::{
    CreateSubmission, ProposedEntry,
};
use crate::shared::core::primitives::DateOnly;
use crate::shared::infrastructure::gateway::{RequestId, UserId};
use crate::tests::fixtures::gateway::EMPLOYEE_ID;

pub fn proposed_entry(date: &str, hour: i64) -> ProposedEntry {
    ProposedEntry {
        date: DateOnly::parse(date).unwrap(),
        hour,
    }
}

pub struct CreateSubmissionBuilder {
    inner: CreateSubmission,
}

impl Default for CreateSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateSubmissionBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateSubmission {
                request_id: 1,
                submitter_id: EMPLOYEE_ID,
                entries: vec![
                    proposed_entry("2024-06-01", 9),
                    proposed_entry("2024-06-02", 10),
                ],
            },
        }
    }

    pub fn request_id(mut self, v: RequestId) -> Self {
        self.inner.request_id = v;
        self
    }

    pub fn submitter_id(mut self, v: UserId) -> Self {
        self.inner.submitter_id = v;
        self
    }

    pub fn entries(mut self, v: Vec<ProposedEntry>) -> Self {
        self.inner.entries = v;
        self
    }

    /// Appends one entry to the current list.
    pub fn entry(mut self, date: &str, hour: i64) -> Self {
        self.inner.entries.push(proposed_entry(date, hour));
        self
    }

    pub fn build(self) -> CreateSubmission {
        self.inner
    }
}
