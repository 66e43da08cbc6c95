use crate::shared::infrastructure::session_store::{Session, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session);
    }

    async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn expire(&self, token: &str, at: DateTime<Utc>) -> bool {
        match self.sessions.write().await.get_mut(token) {
            Some(session) => {
                session.expires_at = at;
                true
            }
            None => false,
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_live_at(now));
        before - sessions.len()
    }
}

#[cfg(test)]
mod in_memory_session_store_tests {
    use super::*;
    use chrono::Duration;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn session(token: &str, expires_at: DateTime<Utc>) -> Session {
        Session {
            token: token.into(),
            user_id: 1,
            expires_at,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_a_stored_session(now: DateTime<Utc>) {
        let store = InMemorySessionStore::new();
        store.insert(session("abc", now + Duration::hours(3))).await;
        let found = store.get("abc").await.expect("missing session");
        assert_eq!(found.user_id, 1);
        assert!(found.is_live_at(now));
        assert_eq!(store.get("other").await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_expire_a_session_in_place(now: DateTime<Utc>) {
        let store = InMemorySessionStore::new();
        store.insert(session("abc", now + Duration::hours(3))).await;
        assert!(store.expire("abc", now).await);
        assert!(!store.expire("unknown", now).await);
        let found = store.get("abc").await.expect("missing session");
        assert!(!found.is_live_at(now));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_purge_only_dead_sessions(now: DateTime<Utc>) {
        let store = InMemorySessionStore::new();
        store.insert(session("old", now - Duration::seconds(1))).await;
        store.insert(session("edge", now)).await;
        store.insert(session("fresh", now + Duration::minutes(5))).await;
        assert_eq!(store.purge_expired(now).await, 2);
        assert_eq!(store.len().await, 1);
        assert!(store.get("fresh").await.is_some());
    }
}
