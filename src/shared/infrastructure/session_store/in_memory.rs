use crate::shared::infrastructure::session_store::{Session, SessionStore, SessionStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    is_offline: bool,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), SessionStoreError> {
        if self.is_offline {
            return Err(SessionStoreError::Backend("Session store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        reg_number: &str,
        now: i64,
        ttl_ms: i64,
    ) -> Result<Session, SessionStoreError> {
        self.ensure_online()?;
        let session = Session {
            token: Uuid::now_v7().simple().to_string(),
            reg_number: reg_number.to_string(),
            expires_at: now.saturating_add(ttl_ms),
        };
        let mut guard = self.sessions.write().await;
        guard.retain(|_, existing| existing.expires_at > now);
        guard.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn resolve(&self, token: &str, now: i64) -> Result<Option<Session>, SessionStoreError> {
        self.ensure_online()?;
        let mut guard = self.sessions.write().await;
        match guard.get(token) {
            Some(session) if session.expires_at > now => Ok(Some(session.clone())),
            Some(_) => {
                guard.remove(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), SessionStoreError> {
        self.ensure_online()?;
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
