// Application state fixtures for adapter and end-to-end tests.

use crate::modules::catalog::core::course::Course;
use crate::modules::catalog::core::ports::CourseCatalog;
use crate::modules::students::core::events::StudentEvent;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::session_store::SessionStore;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::catalog::seeded_catalog;
use crate::tests::fixtures::events::student_signed_up_v1::make_student_signed_up_v1_event;
use axum::response::Response;
use chrono::Utc;
use http_body_util::BodyExt;
use std::sync::Arc;

#[derive(Default)]
pub struct TestStateBuilder {
    config: AppConfig,
    with_student: bool,
    extra_courses: Vec<Course>,
    offline_event_store: bool,
    offline_catalog: bool,
    offline_sessions: bool,
}

#[allow(dead_code)]
impl TestStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Signs up the canonical fixture student before any store goes offline.
    pub fn with_student(mut self) -> Self {
        self.with_student = true;
        self
    }

    pub fn with_course(mut self, course: Course) -> Self {
        self.extra_courses.push(course);
        self
    }

    pub fn offline_event_store(mut self) -> Self {
        self.offline_event_store = true;
        self
    }

    pub fn offline_catalog(mut self) -> Self {
        self.offline_catalog = true;
        self
    }

    pub fn offline_sessions(mut self) -> Self {
        self.offline_sessions = true;
        self
    }

    pub async fn build(self) -> AppState {
        let mut event_store = InMemoryEventStore::<StudentEvent>::new();
        if self.with_student {
            let event = make_student_signed_up_v1_event();
            let stream_id = format!("Student-{}", event.reg_number);
            event_store
                .append(&stream_id, 0, &[StudentEvent::StudentSignedUpV1(event)])
                .await
                .unwrap();
        }
        if self.offline_event_store {
            event_store.toggle_offline();
        }

        let mut catalog = seeded_catalog().await;
        for course in self.extra_courses {
            catalog.upsert(course).await.unwrap();
        }
        if self.offline_catalog {
            catalog.toggle_offline();
        }

        let mut sessions = InMemorySessionStore::new();
        if self.offline_sessions {
            sessions.toggle_offline();
        }

        AppState::new(
            &self.config,
            Arc::new(event_store),
            Arc::new(InMemoryDomainOutbox::new()),
            Arc::new(catalog),
            Arc::new(sessions),
        )
    }
}

/// Seeded catalog, no students.
pub async fn make_test_state() -> AppState {
    TestStateBuilder::new().build().await
}

/// Seeded catalog plus the fixture student `2020/123456`.
pub async fn signed_up_state() -> AppState {
    TestStateBuilder::new().with_student().build().await
}

pub async fn issue_token(state: &AppState, reg_number: &str) -> String {
    state
        .sessions
        .create(reg_number, Utc::now().timestamp_millis(), state.session_ttl_ms)
        .await
        .unwrap()
        .token
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
