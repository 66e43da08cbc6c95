// Session storage port.
//
// A session binds an opaque token to a user id until `expires_at`. Expired
// sessions may linger in the store; readers must check liveness themselves.

use crate::shared::infrastructure::gateway::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session);

    async fn get(&self, token: &str) -> Option<Session>;

    /// Moves the expiry of `token` to `at`. Returns false for an unknown token.
    async fn expire(&self, token: &str, at: DateTime<Utc>) -> bool;

    /// Drops every session that is no longer live at `now`, returning how many.
    async fn purge_expired(&self, now: DateTime<Utc>) -> usize;
}

pub mod in_memory;
