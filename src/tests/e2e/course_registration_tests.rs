use crate::modules::catalog::core::course::{Course, CourseType, Level, Semester};
use crate::modules::students::core::events::StudentEvent;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app::{TestStateBuilder, read_json};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
};
use rstest::{fixture, rstest};
use tokio::join;
use tower::ServiceExt;

const REG: &str = "2020/123456";
const STREAM: &str = "Student-2020/123456";

#[fixture]
async fn state() -> AppState {
    TestStateBuilder::new()
        .with_student()
        .with_course(Course::new(
            "CSC199",
            "Heavy Elective",
            8,
            CourseType::Elective,
            Level::L100,
            Semester::First,
        ))
        .build()
        .await
}

fn post(uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn register(courses: &[&str]) -> Request<Body> {
    post(
        "/register-courses",
        serde_json::json!({ "regNumber": REG, "courses": courses }),
        None,
    )
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[rstest]
#[tokio::test]
async fn registers_in_batches_and_enforces_the_cap_per_bucket(#[future] state: AppState) {
    let state = state.await;
    let app = router(state.clone());

    let (status, body) = call(&app, register(&["CSC101", "MTH101", "PHY101", "GST101"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Courses registered successfully");
    assert_eq!(
        body["student"]["registeredCourses"],
        serde_json::json!(["CSC101", "GST101", "MTH101", "PHY101"])
    );

    let (status, _) = call(&app, register(&["CHM101", "BIO101"])).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, register(&["CSC102", "MTH102", "PHY102", "GST102"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["registeredCourses"].as_array().map(Vec::len), Some(10));

    let version_before = state.event_store.load(STREAM).await.unwrap().version;
    let (status, body) = call(&app, register(&["CSC199"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Cannot register. Total units for 100 Level first semester (25) exceeds 24."
    );
    assert_eq!(state.event_store.load(STREAM).await.unwrap().version, version_before);

    let (status, body) = call(&app, register(&["CSC101", "CHM101", "GST102"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["registeredCourses"].as_array().map(Vec::len), Some(10));
    assert_eq!(state.event_store.load(STREAM).await.unwrap().version, version_before);
}

#[rstest]
#[tokio::test]
async fn concurrent_registrations_for_one_student_both_land(#[future] state: AppState) {
    let state = state.await;
    state.event_store.set_delay_append_ms(10);
    let app = router(state.clone());

    let (first, second) = join!(
        call(&app, register(&["CSC101", "MTH101"])),
        call(&app, register(&["CSC102", "MTH102"]))
    );
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(second.0, StatusCode::OK);

    let stream = state.event_store.load(STREAM).await.unwrap();
    let registered = stream
        .events
        .iter()
        .filter_map(|event| match event {
            StudentEvent::CoursesRegisteredV1(e) => Some(e.registered_courses.len()),
            _ => None,
        })
        .max();
    assert_eq!(registered, Some(4));
}

#[rstest]
#[tokio::test]
async fn a_student_can_sign_up_log_in_and_manage_their_account() {
    let app = router(TestStateBuilder::new().build().await);

    let (status, body) = call(
        &app,
        post(
            "/signup",
            serde_json::json!({
                "name": "Chidi Eze",
                "regNumber": "2021/000001",
                "password": "An0ther!Pass",
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");

    let (status, body) = call(
        &app,
        post(
            "/login",
            serde_json::json!({ "regNumber": "2021/000001", "password": "An0ther!Pass" }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap_or_default().to_string();
    assert!(!token.is_empty());

    let (status, body) = call(
        &app,
        post(
            "/register-courses",
            serde_json::json!({ "regNumber": "2021/000001", "courses": ["CSC201", "MTH201"] }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["registeredCourses"], serde_json::json!(["CSC201", "MTH201"]));

    let (status, _) = call(
        &app,
        post(
            "/register-courses",
            serde_json::json!({ "regNumber": REG, "courses": ["CSC201"] }),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let update = Request::put("/update-profile")
        .header("content-type", "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(
            serde_json::json!({
                "regNumber": "2021/000001",
                "email": "chidi@example.com",
            })
            .to_string(),
        ))
        .unwrap();
    let (status, body) = call(&app, update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["email"], "chidi@example.com");

    let check = Request::get("/check-session")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(&app, check).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["email"], "chidi@example.com");
    assert_eq!(body["student"]["registeredCourses"], serde_json::json!(["CSC201", "MTH201"]));

    let (status, body) = call(&app, post("/logout", serde_json::json!({}), Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out");

    let check = Request::get("/check-session")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(&app, check).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not logged in");

    let (status, body) = call(
        &app,
        post("/forgot-password", serde_json::json!({ "regNumber": "2021/000001" }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reset link sent");
}

#[rstest]
#[tokio::test]
async fn serves_the_catalog_and_graphql_from_one_router(#[future] state: AppState) {
    let app = router(state.await);

    let (status, body) = call(
        &app,
        Request::get("/courses?level=100&semester=second").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().is_some_and(|courses| !courses.is_empty()));

    let (status, body) = call(
        &app,
        post("/gql", serde_json::json!({ "query": "{ courses(level: \"100\") { code } }" }), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["courses"].as_array().is_some_and(|courses| courses.len() >= 10));
}
