use crate::modules::identity::core::password::PasswordHashing;
use crate::shared::infrastructure::gateway::{Gateway, StorageError, UserId};
use crate::shared::infrastructure::session_store::{Session, SessionStore};
use chrono::{Duration, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 3 * 60 * 60;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid login_id or password")]
    InvalidCredentials,

    #[error("no session presented")]
    MissingSession,

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("password check failed: {0}")]
    Hashing(String),
}

pub struct SessionGate<G: ?Sized, S: ?Sized> {
    gateway: Arc<G>,
    sessions: Arc<S>,
    hashing: PasswordHashing,
    ttl: Duration,
}

impl<G, S> SessionGate<G, S>
where
    G: Gateway + ?Sized,
    S: SessionStore + ?Sized,
{
    pub fn new(gateway: Arc<G>, sessions: Arc<S>, hashing: PasswordHashing, ttl: Duration) -> Self {
        Self {
            gateway,
            sessions,
            hashing,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Checks the credentials and opens a session. Unknown login ids and wrong
    /// passwords are indistinguishable to the caller.
    pub async fn login(&self, login_id: &str, password: &str) -> Result<Session, AuthError> {
        let record = match self.gateway.get_user_by_login_id(login_id).await {
            Ok(record) => Some(record),
            Err(StorageError::NotFound { .. }) => None,
            Err(e) => return Err(e.into()),
        };

        let hash = record
            .as_ref()
            .map(|r| r.password_hash.clone())
            .unwrap_or_else(|| self.hashing.decoy_hash());
        let hashing = self.hashing.clone();
        let password = password.to_owned();
        let verified = tokio::task::spawn_blocking(move || hashing.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let Some(user) = record.filter(|_| verified) else {
            warn!(login_id, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let now = Utc::now();
        self.sessions.purge_expired(now).await;
        let session = Session {
            token: Uuid::new_v4().to_string(),
            user_id: user.id,
            expires_at: now + self.ttl,
        };
        self.sessions.insert(session.clone()).await;
        info!(user_id = user.id, "session established");
        Ok(session)
    }

    /// Expires the presented session. An unknown token is not an error.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        let token = token.ok_or(AuthError::MissingSession)?;
        if self.sessions.expire(token, Utc::now()).await {
            info!("session closed");
        }
        Ok(())
    }

    pub async fn resolve_user_id(&self, token: Option<&str>) -> Option<UserId> {
        let session = self.sessions.get(token?).await?;
        session
            .is_live_at(Utc::now())
            .then_some(session.user_id)
    }
}
