use crate::modules::catalog::core::ports::CourseCatalog;
use crate::modules::students::adapters::outbound::intent_outbox::dispatch_committed_intents;
use crate::modules::students::adapters::outbound::student_stream::{LoadedStudent, load_student};
use crate::modules::students::core::decision::{DecideError, Decision};
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::registration::{UnknownCoursePolicy, index_by_code};
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::modules::students::use_cases::register_courses::command::RegisterCourses;
use crate::modules::students::use_cases::register_courses::decide::decide_register_courses;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct RegisterCoursesHandler<TEventStore, TOutbox, TCatalog>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TCatalog: CourseCatalog + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    catalog: Arc<TCatalog>,
    policy: UnknownCoursePolicy,
    max_conflict_retries: u32,
}

impl<TEventStore, TOutbox, TCatalog> RegisterCoursesHandler<TEventStore, TOutbox, TCatalog>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TCatalog: CourseCatalog + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        catalog: Arc<TCatalog>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            catalog,
            policy: UnknownCoursePolicy::default(),
            max_conflict_retries: 0,
        }
    }

    pub fn with_policy(mut self, policy: UnknownCoursePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_conflict_retries(mut self, retries: u32) -> Self {
        self.max_conflict_retries = retries;
        self
    }

    /// Load, merge, validate and conditionally append. A version conflict
    /// reruns the whole cycle against the fresh stream until retries run out.
    pub async fn handle(&self, command: RegisterCourses) -> Result<StudentView, ApplicationError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let loaded = load_student(&*self.event_store, &command.reg_number).await?;
            match self.attempt(loaded, command.clone()).await {
                Err(ApplicationError::EventStore(EventStoreError::VersionMismatch {
                    expected,
                    actual,
                })) => {
                    if attempt > self.max_conflict_retries {
                        tracing::warn!(
                            reg_number = %command.reg_number,
                            attempts = attempt,
                            "course registration gave up after version conflicts"
                        );
                        return Err(ApplicationError::RetriesExhausted { attempts: attempt });
                    }
                    tracing::debug!(
                        reg_number = %command.reg_number,
                        expected,
                        actual,
                        attempt,
                        "course registration conflicted, retrying"
                    );
                }
                outcome => return outcome,
            }
        }
    }

    async fn attempt(
        &self,
        loaded: LoadedStudent,
        command: RegisterCourses,
    ) -> Result<StudentView, ApplicationError> {
        let Some(student) = loaded.state.student() else {
            return Err(DecideError::StudentNotFound.into());
        };
        let mut codes: Vec<String> = student.registered_courses.iter().cloned().collect();
        codes.extend(command.courses.iter().cloned());
        let lookup = index_by_code(self.catalog.find(&codes).await?);

        match decide_register_courses(&loaded.state, command, &lookup, self.policy) {
            Decision::Accepted { events, intents } => {
                if events.is_empty() {
                    return Ok(StudentView::from(student));
                }
                self.event_store
                    .append(&loaded.stream_id, loaded.version, &events)
                    .await?;
                dispatch_committed_intents(
                    &*self.outbox,
                    &loaded.stream_id,
                    loaded.version,
                    &self.topic,
                    intents,
                )
                .await;
                tracing::info!(stream_id = %loaded.stream_id, "courses registered");

                let state = events.into_iter().fold(loaded.state, evolve);
                state
                    .student()
                    .map(StudentView::from)
                    .ok_or_else(|| {
                        ApplicationError::Unexpected("student vanished after registration".into())
                    })
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
