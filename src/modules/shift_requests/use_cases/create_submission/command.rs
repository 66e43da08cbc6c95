use crate::shared::core::primitives::DateOnly;
use crate::shared::infrastructure::gateway::{RequestId, UserId};
use serde::Deserialize;

/// An hour the submitter offers. `hour` is unchecked until decided.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProposedEntry {
    pub date: DateOnly,
    pub hour: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubmission {
    pub request_id: RequestId,
    pub submitter_id: UserId,
    pub entries: Vec<ProposedEntry>,
}
