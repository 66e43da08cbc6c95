use crate::shared::core::errors::{ApplicationError, InputError};
use crate::shared::infrastructure::gateway::EntryDraft;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("already submitted")]
    AlreadySubmitted,

    #[error("date must be within request range, got {date}")]
    DateOutOfRange { date: String },

    #[error("must be 0 <= hour <= 23, got {hour}")]
    HourOutOfRange { hour: i64 },
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::AlreadySubmitted => ApplicationError::AlreadySubmitted,
            DecideError::DateOutOfRange { .. } => {
                InputError::new(reason.to_string(), "date must be within request range").into()
            }
            DecideError::HourOutOfRange { .. } => {
                InputError::new(reason.to_string(), "hour out of range").into()
            }
        }
    }
}

pub enum Decision {
    Accepted { entries: Vec<EntryDraft> },
    Rejected { reason: DecideError },
}
