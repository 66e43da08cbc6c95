pub mod create_request;
pub mod create_submission;
