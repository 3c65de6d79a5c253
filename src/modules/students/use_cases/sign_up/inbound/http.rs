use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::sign_up::command::SignUp;
use crate::shared::inbound::http_error::{MessageBody, malformed_body};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SignUpBody {
    pub name: String,
    pub reg_number: RegNumber,
    pub password: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignUpBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    let command = SignUp {
        name: body.name,
        reg_number: body.reg_number,
        password: body.password,
        signed_up_at: Utc::now().timestamp_millis(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageBody::new("User created successfully")),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod sign_up_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{TestStateBuilder, make_test_state, read_json};

    use super::handle;

    const VALID: &str = r#"{"name":"Ada Obi","regNumber":"2020/123456","password":"Str0ng!Pass"}"#;

    fn app(state: AppState) -> Router {
        Router::new().route("/signup", post(handle)).with_state(state)
    }

    fn request(body: &str) -> Request<Body> {
        Request::post("/signup")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_201_on_valid_request() {
        let response = app(make_test_state().await).oneshot(request(VALID)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = read_json(response).await;
        assert_eq!(json["message"], "User created successfully");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_for_a_duplicate_registration_number() {
        let router = app(make_test_state().await);
        router.clone().oneshot(request(VALID)).await.unwrap();

        let response = router.oneshot(request(VALID)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["message"], "Registration number already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_400_for_a_weak_password() {
        let body = r#"{"name":"Ada Obi","regNumber":"2020/123456","password":"weak"}"#;
        let response = app(make_test_state().await).oneshot(request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[case("not-json")]
    #[case(r#"{"name":"Ada Obi","regNumber":"2020-123456","password":"Str0ng!Pass"}"#)]
    #[case(r#"{"name":"Ada Obi","regNumber":"2020/123456","password":"Str0ng!Pass","admin":true}"#)]
    #[case(r#"{"name":"Ada Obi","regNumber":"2020/123456"}"#)]
    #[tokio::test]
    async fn it_should_return_422_on_malformed_body(#[case] body: &str) {
        let response = app(make_test_state().await).oneshot(request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(read_json(response).await.get("message").is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_500_when_event_store_is_offline() {
        let state = TestStateBuilder::new().offline_event_store().build().await;
        let response = app(state).oneshot(request(VALID)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(read_json(response).await["message"], "Internal server error");
    }
}
