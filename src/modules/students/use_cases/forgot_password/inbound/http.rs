use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::forgot_password::command::RequestPasswordReset;
use crate::shared::inbound::http_error::{MessageBody, malformed_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForgotPasswordBody {
    pub reg_number: RegNumber,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ForgotPasswordBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    let command = RequestPasswordReset {
        reg_number: body.reg_number,
        requested_at: Utc::now().timestamp_millis(),
    };

    match state.forgot_password_handler.handle(command).await {
        Ok(()) => Json(MessageBody::new("Reset link sent")).into_response(),
        Err(e) => e.into_response(),
    }
}
