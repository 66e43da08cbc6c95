use crate::shared::core::primitives::{DateOnly, DateTime};
use crate::shared::infrastructure::gateway::UserId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub creator_id: UserId,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub deadline: DateTime,
}
