use axum::{
    Extension, Router,
    routing::{get, post, put},
};

use crate::modules::catalog::use_cases::list_courses::inbound::http as list_courses_http;
use crate::modules::students::use_cases::check_session::inbound::http as check_session_http;
use crate::modules::students::use_cases::forgot_password::inbound::http as forgot_password_http;
use crate::modules::students::use_cases::log_in::inbound::http as log_in_http;
use crate::modules::students::use_cases::log_out::inbound::http as log_out_http;
use crate::modules::students::use_cases::register_courses::inbound::http as register_courses_http;
use crate::modules::students::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::students::use_cases::update_profile::inbound::http as update_profile_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/signup", post(sign_up_http::handle))
        .route("/login", post(log_in_http::handle))
        .route("/check-session", get(check_session_http::handle))
        .route("/logout", post(log_out_http::handle))
        .route("/courses", get(list_courses_http::handle))
        .route("/register-courses", post(register_courses_http::handle))
        .route("/update-profile", put(update_profile_http::handle))
        .route("/forgot-password", post(forgot_password_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}
