// HTTP mapping for application errors.
//
// Every failure leaves as `{ "message": string }`. Backend failures are logged
// and redacted to a generic message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::students::core::decision::DecideError;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn status_for_domain(error: &DecideError) -> StatusCode {
    match error {
        DecideError::StudentNotFound | DecideError::RegNumberNotFound => StatusCode::NOT_FOUND,
        DecideError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        DecideError::AlreadyExists
        | DecideError::BlankName
        | DecideError::WeakPassword(_)
        | DecideError::NoCoursesSelected
        | DecideError::Registration(_) => StatusCode::BAD_REQUEST,
    }
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(e) => status_for_domain(e),
        ApplicationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotLoggedIn => StatusCode::UNAUTHORIZED,
        ApplicationError::SessionMismatch => StatusCode::FORBIDDEN,
        ApplicationError::RetriesExhausted { .. }
        | ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::EventStore(_)
        | ApplicationError::Outbox(_)
        | ApplicationError::Catalog(_)
        | ApplicationError::Session(_)
        | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The message a client may see. Internal failures are logged and replaced.
pub fn client_message(error: &ApplicationError) -> String {
    if status_for(error) == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %error, "request failed");
        "Internal server error".to_string()
    } else {
        error.to_string()
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: client_message(&self),
        };
        (status_for(&self), Json(body)).into_response()
    }
}

/// 422 for bodies that fail to parse or validate.
pub fn malformed_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected request body");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageBody::new(rejection.body_text())),
    )
        .into_response()
}
