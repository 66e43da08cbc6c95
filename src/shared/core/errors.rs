use crate::shared::infrastructure::gateway::StorageError;
use thiserror::Error;

/// A rejected input carrying two messages: `internal` is for logs, `message`
/// is safe to return to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{internal}")]
pub struct InputError {
    internal: String,
    message: String,
}

impl InputError {
    pub fn new(internal: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            internal: internal.into(),
            message: message.into(),
        }
    }

    pub fn internal(&self) -> &str {
        &self.internal
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("forbidden access")]
    Forbidden,

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("already submitted")]
    AlreadySubmitted,

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound { entity, id } => ApplicationError::NotFound { entity, id },
            other => ApplicationError::Storage(other),
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_keep_the_internal_and_user_facing_messages_apart() {
        let error = InputError::new("must be 0 <= hour <= 23", "hour must be between 0 and 23");
        assert_eq!(error.to_string(), "must be 0 <= hour <= 23");
        assert_eq!(error.internal(), "must be 0 <= hour <= 23");
        assert_eq!(error.message(), "hour must be between 0 and 23");
    }

    #[rstest]
    fn it_should_surface_a_missing_row_as_not_found() {
        let error: ApplicationError = StorageError::NotFound {
            entity: "request",
            id: "7".into(),
        }
        .into();
        assert!(matches!(
            error,
            ApplicationError::NotFound { entity: "request", ref id } if id == "7"
        ));
        assert_eq!(error.to_string(), "request 7 not found");
    }

    #[rstest]
    fn it_should_pass_other_storage_failures_through_unchanged() {
        let error: ApplicationError = StorageError::Backend("disk full".into()).into();
        assert!(matches!(
            error,
            ApplicationError::Storage(StorageError::Backend(ref m)) if m == "disk full"
        ));
    }
}
