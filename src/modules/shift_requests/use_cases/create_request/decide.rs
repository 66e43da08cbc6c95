use crate::modules::shift_requests::use_cases::create_request::{
    command::CreateRequest,
    decision::{DecideError, Decision},
};
use crate::shared::core::primitives::is_before_or_equal;

pub fn decide_create_request(command: CreateRequest) -> Decision {
    let ordered = is_before_or_equal(&command.deadline, &command.start_date)
        && is_before_or_equal(&command.start_date, &command.end_date);
    if !ordered {
        return Decision::Rejected {
            reason: DecideError::InvalidWindow,
        };
    }
    Decision::Accepted { command }
}
