use crate::modules::catalog::core::ports::CatalogError;
use crate::modules::students::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use crate::shared::infrastructure::session_store::SessionStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Session(#[from] SessionStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session does not belong to this registration number")]
    SessionMismatch,

    #[error("Registration conflicted with concurrent updates after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("unexpected: {0}")]
    Unexpected(String),
}
