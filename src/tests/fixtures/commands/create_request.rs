// Builder for CreateRequest commands. Defaults to the manager opening the
// first week of June 2024 with a deadline two days before.

use crate::modules::shift_requests::use_cases::create_request::command::CreateRequest;
use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::UserId;
use crate::tests::fixtures::gateway::MANAGER_ID;

pub struct CreateRequestBuilder {
    inner: CreateRequest,
}

impl Default for CreateRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateRequestBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateRequest {
                creator_id: MANAGER_ID,
                start_date: DateOnly::parse("2024-06-01").unwrap(),
                end_date: DateOnly::parse("2024-06-07").unwrap(),
                deadline: DateTime::parse("2024-05-30 00:00:00").unwrap(),
            },
        }
    }

    pub fn creator_id(mut self, v: UserId) -> Self {
        self.inner.creator_id = v;
        self
    }

    pub fn start_date(mut self, v: &str) -> Self {
        self.inner.start_date = DateOnly::parse(v).unwrap();
        self
    }

    pub fn end_date(mut self, v: &str) -> Self {
        self.inner.end_date = DateOnly::parse(v).unwrap();
        self
    }

    pub fn deadline(mut self, v: &str) -> Self {
        self.inner.deadline = DateTime::parse(v).unwrap();
        self
    }

    pub fn build(self) -> CreateRequest {
        self.inner
    }
}

#[cfg(test)]
mod create_request_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = CreateRequestBuilder::new()
            .creator_id(9)
            .start_date("2025-01-02")
            .end_date("2025-01-03")
            .deadline("2025-01-01 08:30:00")
            .build();

        assert_eq!(custom.creator_id, 9);
        assert_eq!(custom.start_date.format(), "2025-01-02");
        assert_eq!(custom.end_date.format(), "2025-01-03");
        assert_eq!(custom.deadline.format(), "2025-01-01 08:30:00");
    }
}
