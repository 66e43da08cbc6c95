use crate::modules::identity::core::capabilities::Capabilities;
use crate::shared::infrastructure::gateway::UserId;
use crate::shared::infrastructure::gateway::in_memory::InMemoryGateway;
use crate::tests::fixtures::identity::test_hashing;
use crate::tests::fixtures::records::{request_record, user_record};

pub const EMPLOYEE_ID: UserId = 1;
pub const MANAGER_ID: UserId = 2;
pub const OTHER_EMPLOYEE_ID: UserId = 3;
/// Holds both capabilities.
pub const LEAD_ID: UserId = 4;

/// Login ids double as the password suffix: `employee1` / `pass_employee1`.
fn users() -> Vec<crate::shared::infrastructure::gateway::UserRecord> {
    let hashing = test_hashing();
    [
        (EMPLOYEE_ID, "employee1", "Employee 1", Capabilities::EMPLOYEE),
        (MANAGER_ID, "manager1", "Manager 2", Capabilities::MANAGER),
        (OTHER_EMPLOYEE_ID, "employee2", "Employee 3", Capabilities::EMPLOYEE),
        (
            LEAD_ID,
            "lead1",
            "Lead 4",
            Capabilities::EMPLOYEE | Capabilities::MANAGER,
        ),
    ]
    .into_iter()
    .map(|(id, login_id, name, capabilities)| {
        let mut record = user_record(id, login_id, name, capabilities);
        record.password_hash = hashing
            .hash(&format!("pass_{login_id}"))
            .expect("hash failed");
        record
    })
    .collect()
}

/// Four users and no requests.
pub fn seeded_gateway() -> InMemoryGateway {
    InMemoryGateway::with_records(users(), vec![])
}

/// Adds request 1 by the manager: 2024-06-01..=2024-06-07, deadline at the start.
pub fn seeded_gateway_with_request() -> InMemoryGateway {
    InMemoryGateway::with_records(
        users(),
        vec![request_record(1, MANAGER_ID, "2024-06-01", "2024-06-07")],
    )
}
