use crate::modules::identity::core::user::User;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::{RequestId, RequestRecord, StorageError};

/// A window of days staff report availability for, open until `deadline`.
/// `deadline <= start_date <= end_date` holds for every stored request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub creator: User,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub deadline: DateTime,
    pub created_at: DateTime,
}

impl Request {
    pub fn from_record(record: RequestRecord, creator: User) -> Result<Self, StorageError> {
        Ok(Request {
            id: record.id,
            creator,
            start_date: DateOnly::parse(&record.start_date)?,
            end_date: DateOnly::parse(&record.end_date)?,
            deadline: DateTime::parse(&record.deadline)?,
            created_at: DateTime::parse(&record.created_at)?,
        })
    }

    pub fn covers(&self, date: &DateOnly) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }
}
