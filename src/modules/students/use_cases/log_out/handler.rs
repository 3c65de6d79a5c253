use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;

pub struct LogOutHandler<TSessions>
where
    TSessions: SessionStore + 'static,
{
    sessions: Arc<TSessions>,
}

impl<TSessions> LogOutHandler<TSessions>
where
    TSessions: SessionStore + 'static,
{
    pub fn new(sessions: Arc<TSessions>) -> Self {
        Self { sessions }
    }

    /// Revoking an unknown token, or no token at all, is not an error.
    pub async fn handle(&self, token: Option<&str>) -> Result<(), ApplicationError> {
        if let Some(token) = token {
            self.sessions.revoke(token).await?;
        }
        Ok(())
    }
}
