use crate::modules::identity::core::user::User;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::{
    EntryId, EntryRecord, RequestId, StorageError, SubmissionId, SubmissionRecord,
};

pub const LAST_HOUR: u8 = 23;

/// One available hour on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub submission_id: SubmissionId,
    pub date: DateOnly,
    pub hour: u8,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = StorageError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let hour = u8::try_from(record.hour)
            .ok()
            .filter(|h| *h <= LAST_HOUR)
            .ok_or_else(|| {
                StorageError::Corrupt(format!("entry {}: hour {}", record.id, record.hour))
            })?;
        Ok(Entry {
            id: record.id,
            submission_id: record.submission_id,
            date: DateOnly::parse(&record.date)?,
            hour,
        })
    }
}

/// An employee's single answer to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: SubmissionId,
    pub request_id: RequestId,
    pub submitter: User,
    pub entries: Vec<Entry>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Submission {
    pub fn from_record(
        record: SubmissionRecord,
        submitter: User,
        entries: Vec<EntryRecord>,
    ) -> Result<Self, StorageError> {
        Ok(Submission {
            id: record.id,
            request_id: record.request_id,
            submitter,
            entries: entries
                .into_iter()
                .map(Entry::try_from)
                .collect::<Result<_, _>>()?,
            created_at: DateTime::parse(&record.created_at)?,
            updated_at: DateTime::parse(&record.updated_at)?,
        })
    }
}
