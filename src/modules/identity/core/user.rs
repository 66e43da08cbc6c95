use crate::modules::identity::core::capabilities::{Capabilities, Capability};
use crate::shared::core::primitives::DateTime;
use crate::shared::infrastructure::gateway::{StorageError, UserId, UserRecord};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login_id: String,
    pub password_hash: String,
    pub name: String,
    pub capabilities: Capabilities,
    pub created_at: DateTime,
}

impl User {
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login_id", &self.login_id)
            .field("password_hash", &"<redacted>")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl TryFrom<UserRecord> for User {
    type Error = StorageError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let capabilities = Capabilities::from_role(record.role)
            .map_err(|e| StorageError::Corrupt(format!("user {}: {e}", record.id)))?;
        Ok(User {
            id: record.id,
            created_at: DateTime::parse(&record.created_at)?,
            login_id: record.login_id,
            password_hash: record.password_hash,
            name: record.name,
            capabilities,
        })
    }
}
