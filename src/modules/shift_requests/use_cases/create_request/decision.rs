use crate::modules::shift_requests::use_cases::create_request::command::CreateRequest;
use crate::shared::core::errors::{ApplicationError, InputError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("must be deadline <= start_date <= end_date")]
    InvalidWindow,
}

impl DecideError {
    pub fn user_message(&self) -> &'static str {
        match self {
            DecideError::InvalidWindow => {
                "the deadline must not be after the start date, and the start date must not be after the end date"
            }
        }
    }
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        InputError::new(reason.to_string(), reason.user_message()).into()
    }
}

pub enum Decision {
    Accepted { command: CreateRequest },
    Rejected { reason: DecideError },
}
