use crate::modules::identity::core::capabilities::Capabilities;
use crate::shared::infrastructure::gateway::{RequestId, RequestRecord, UserId, UserRecord};

pub const CREATED_AT: &str = "2024-01-01 00:00:00";

pub fn user_record(id: UserId, login_id: &str, name: &str, capabilities: Capabilities) -> UserRecord {
    UserRecord {
        id,
        login_id: login_id.to_string(),
        password_hash: "not-a-hash".to_string(),
        name: name.to_string(),
        role: capabilities.bits(),
        created_at: CREATED_AT.to_string(),
    }
}

pub fn employee_record(id: UserId) -> UserRecord {
    user_record(
        id,
        &format!("employee{id}"),
        &format!("Employee {id}"),
        Capabilities::EMPLOYEE,
    )
}

pub fn manager_record(id: UserId) -> UserRecord {
    user_record(
        id,
        &format!("manager{id}"),
        &format!("Manager {id}"),
        Capabilities::MANAGER,
    )
}

/// A request whose deadline is midnight of its first day.
pub fn request_record(
    id: RequestId,
    creator_id: UserId,
    start_date: &str,
    end_date: &str,
) -> RequestRecord {
    RequestRecord {
        id,
        creator_id,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        deadline: format!("{start_date} 00:00:00"),
        created_at: CREATED_AT.to_string(),
    }
}
