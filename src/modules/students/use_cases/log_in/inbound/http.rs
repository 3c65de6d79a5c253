use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::modules::students::use_cases::log_in::command::LogIn;
use crate::shared::inbound::http_error::malformed_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogInBody {
    pub reg_number: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LogInResponse {
    pub student: StudentView,
    pub token: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LogInBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    let command = LogIn {
        reg_number: body.reg_number,
        password: body.password,
        logged_in_at: Utc::now().timestamp_millis(),
    };

    match state.log_in_handler.handle(command).await {
        Ok(logged_in) => Json(LogInResponse {
            student: logged_in.student,
            token: logged_in.token,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
