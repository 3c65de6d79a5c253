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
use crate::modules::students::use_cases::update_profile::command::{ProfileChanges, UpdateProfile};
use crate::shared::inbound::http_error::malformed_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileBody {
    pub reg_number: RegNumber,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub course_of_study: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateProfileResponse {
    pub student: StudentView,
}

pub async fn handle(
    State(state): State<AppState>,
    session: Option<StudentSession>,
    body: Result<Json<UpdateProfileBody>, JsonRejection>,
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

    let command = UpdateProfile {
        reg_number: body.reg_number,
        changes: ProfileChanges {
            name: body.name,
            email: body.email,
            contact: body.contact,
            age: body.age,
            address: body.address,
            state: body.state,
            department: body.department,
            course_of_study: body.course_of_study,
        },
        updated_at: Utc::now().timestamp_millis(),
    };

    match state.update_profile_handler.handle(command).await {
        Ok(student) => Json(UpdateProfileResponse { student }).into_response(),
        Err(e) => e.into_response(),
    }
}
