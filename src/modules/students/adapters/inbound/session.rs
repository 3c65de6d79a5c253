// Request-scoped student identity.
//
// `StudentSession` resolves `Authorization: Bearer <token>` through the session
// store once per request. As `Option<StudentSession>` a missing header is `None`,
// while a header carrying an unknown or expired token is still rejected.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use chrono::Utc;

use crate::modules::students::core::reg_number::RegNumber;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::session_store::SessionStore;
use crate::shell::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSession {
    pub token: String,
    pub reg_number: String,
}

impl StudentSession {
    /// 403 unless the session was issued for `reg_number`.
    pub fn ensure_owns(&self, reg_number: &RegNumber) -> Result<(), ApplicationError> {
        if self.reg_number == reg_number.as_str() {
            Ok(())
        } else {
            tracing::warn!(
                session = %self.reg_number,
                requested = %reg_number,
                "session used for another student"
            );
            Err(ApplicationError::SessionMismatch)
        }
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for StudentSession {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApplicationError::NotLoggedIn)?;
        let session = state
            .sessions
            .resolve(token, Utc::now().timestamp_millis())
            .await?
            .ok_or(ApplicationError::NotLoggedIn)?;
        Ok(StudentSession {
            token: session.token,
            reg_number: session.reg_number,
        })
    }
}

impl OptionalFromRequestParts<AppState> for StudentSession {
    type Rejection = ApplicationError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if bearer_token(&parts.headers).is_none() {
            return Ok(None);
        }
        <StudentSession as FromRequestParts<AppState>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}
