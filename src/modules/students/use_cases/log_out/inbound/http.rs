use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::modules::students::adapters::inbound::session::bearer_token;
use crate::shared::inbound::http_error::MessageBody;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, headers: HeaderMap) -> Response {
    match state.log_out_handler.handle(bearer_token(&headers)).await {
        Ok(()) => Json(MessageBody::new("Logged out")).into_response(),
        Err(e) => e.into_response(),
    }
}
