use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::catalog::use_cases::list_courses::filter::parse_filter;
use crate::shared::application_error::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCoursesParams {
    pub level: Option<String>,
    pub semester: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListCoursesParams>,
) -> Response {
    let filter = match parse_filter(params.level.as_deref(), params.semester.as_deref()) {
        Ok(filter) => filter,
        Err(e) => return ApplicationError::InvalidInput(e.to_string()).into_response(),
    };

    match state.list_courses_handler.handle(filter).await {
        Ok(courses) => Json(courses).into_response(),
        Err(e) => e.into_response(),
    }
}
