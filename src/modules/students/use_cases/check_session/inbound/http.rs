use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::students::adapters::inbound::session::StudentSession;
use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::shared::application_error::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CheckSessionResponse {
    pub student: StudentView,
}

/// Reloads the student on every call, so the response reflects the latest stream.
pub async fn handle(State(state): State<AppState>, session: StudentSession) -> Response {
    let Ok(reg_number) = RegNumber::parse(session.reg_number) else {
        return ApplicationError::NotLoggedIn.into_response();
    };
    match state.get_student_handler.handle(&reg_number).await {
        Ok(Some(student)) => Json(CheckSessionResponse { student }).into_response(),
        Ok(None) => ApplicationError::NotLoggedIn.into_response(),
        Err(e) => e.into_response(),
    }
}
