// Session store port.
//
// Purpose
// - Map opaque bearer tokens to the registration number they were issued for.
//
// Boundaries
// - Timestamps are epoch milliseconds supplied by the caller; the store never reads the clock.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub reg_number: String,
    pub expires_at: i64,
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(
        &self,
        reg_number: &str,
        now: i64,
        ttl_ms: i64,
    ) -> Result<Session, SessionStoreError>;

    /// Expired sessions resolve to `None`.
    async fn resolve(&self, token: &str, now: i64) -> Result<Option<Session>, SessionStoreError>;

    async fn revoke(&self, token: &str) -> Result<(), SessionStoreError>;
}

pub mod in_memory;
