use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::students::adapters::inbound::session::StudentSession;
use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::modules::students::use_cases::register_courses::command::RegisterCourses;
use crate::shared::inbound::http_error::malformed_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterCoursesBody {
    pub reg_number: RegNumber,
    pub courses: Vec<String>,
}

#[derive(Serialize)]
pub struct RegisterCoursesResponse {
    pub message: &'static str,
    pub student: StudentView,
}

pub async fn handle(
    State(state): State<AppState>,
    session: Option<StudentSession>,
    body: Result<Json<RegisterCoursesBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };
    if let Some(session) = &session {
        if let Err(e) = session.ensure_owns(&body.reg_number) {
            return e.into_response();
        }
    }

    let command = RegisterCourses {
        reg_number: body.reg_number,
        courses: body.courses,
        registered_at: Utc::now().timestamp_millis(),
    };

    match state.register_courses_handler.handle(command).await {
        Ok(student) => Json(RegisterCoursesResponse {
            message: "Courses registered successfully",
            student,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
