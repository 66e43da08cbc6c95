// Persistence gateway consumed by the use cases.
//
// Records are plain rows. Temporal fields travel as text in the fixed
// `YYYY-MM-DD` / `YYYY-MM-DD HH:MM:SS` formats; parsing them into typed values
// is the caller's job.

use crate::shared::core::primitives::MalformedInput;
use async_trait::async_trait;
use thiserror::Error;

pub type UserId = i64;
pub type RequestId = i64;
pub type SubmissionId = i64;
pub type EntryId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub login_id: String,
    pub password_hash: String,
    pub name: String,
    pub role: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub login_id: String,
    pub password_hash: String,
    pub name: String,
    pub role: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    pub id: RequestId,
    pub creator_id: UserId,
    pub start_date: String,
    pub end_date: String,
    pub deadline: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub request_id: RequestId,
    pub submitter_id: UserId,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: EntryId,
    pub submission_id: SubmissionId,
    pub date: String,
    pub hour: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntryRecord {
    pub submission_id: SubmissionId,
    pub date: String,
    pub hour: i64,
}

/// An entry that does not belong to a submission yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub hour: i64,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StorageError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<MalformedInput> for StorageError {
    fn from(error: MalformedInput) -> Self {
        StorageError::Corrupt(error.to_string())
    }
}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn get_user_by_id(&self, id: UserId) -> Result<UserRecord, StorageError>;

    async fn get_user_by_login_id(&self, login_id: &str) -> Result<UserRecord, StorageError>;

    async fn create_user(&self, user: NewUserRecord) -> Result<UserId, StorageError>;

    /// All requests in ascending id order.
    async fn get_requests(&self) -> Result<Vec<RequestRecord>, StorageError>;

    async fn get_request_by_id(&self, id: RequestId) -> Result<RequestRecord, StorageError>;

    async fn create_request(
        &self,
        creator_id: UserId,
        start_date: &str,
        end_date: &str,
        deadline: &str,
    ) -> Result<RequestId, StorageError>;

    async fn get_submissions_by_request_id(
        &self,
        request_id: RequestId,
    ) -> Result<Vec<SubmissionRecord>, StorageError>;

    async fn get_submission_by_request_and_submitter(
        &self,
        request_id: RequestId,
        submitter_id: UserId,
    ) -> Result<Option<SubmissionRecord>, StorageError>;

    /// Fails with `UniqueViolation` when the pair already has a submission.
    async fn create_submission(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
    ) -> Result<SubmissionId, StorageError>;

    async fn get_entries_by_submission_id(
        &self,
        submission_id: SubmissionId,
    ) -> Result<Vec<EntryRecord>, StorageError>;

    /// Batch insert; ids are assigned sequentially in input order.
    async fn create_entries(
        &self,
        entries: Vec<NewEntryRecord>,
    ) -> Result<Vec<EntryId>, StorageError>;

    /// Writes a submission and its entries. This default chains the two calls
    /// and leaves an empty submission behind if the entry write fails;
    /// implementations that can do it atomically override it.
    async fn create_submission_with_entries(
        &self,
        submitter_id: UserId,
        request_id: RequestId,
        entries: Vec<EntryDraft>,
    ) -> Result<SubmissionId, StorageError> {
        let submission_id = self.create_submission(submitter_id, request_id).await?;
        let rows = entries
            .into_iter()
            .map(|draft| NewEntryRecord {
                submission_id,
                date: draft.date,
                hour: draft.hour,
            })
            .collect();
        self.create_entries(rows).await?;
        Ok(submission_id)
    }
}

pub mod in_memory;
pub mod sqlite;
