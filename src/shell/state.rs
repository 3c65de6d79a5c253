use crate::modules::catalog::adapters::outbound::catalog_in_memory::InMemoryCourseCatalog;
use crate::modules::catalog::use_cases::list_courses::handler::ListCoursesHandler;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::use_cases::forgot_password::handler::ForgotPasswordHandler;
use crate::modules::students::use_cases::get_student::handler::GetStudentHandler;
use crate::modules::students::use_cases::log_in::handler::LogInHandler;
use crate::modules::students::use_cases::log_out::handler::LogOutHandler;
use crate::modules::students::use_cases::register_courses::handler::RegisterCoursesHandler;
use crate::modules::students::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::students::use_cases::update_profile::handler::UpdateProfileHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::config::AppConfig;
use std::sync::Arc;

type StudentStore = InMemoryEventStore<StudentEvent>;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<StudentStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub catalog: Arc<InMemoryCourseCatalog>,
    pub sessions: Arc<InMemorySessionStore>,
    pub session_ttl_ms: i64,
    pub sign_up_handler: Arc<SignUpHandler<StudentStore, InMemoryDomainOutbox>>,
    pub log_in_handler: Arc<LogInHandler<StudentStore, InMemorySessionStore>>,
    pub log_out_handler: Arc<LogOutHandler<InMemorySessionStore>>,
    pub get_student_handler: Arc<GetStudentHandler<StudentStore>>,
    pub register_courses_handler:
        Arc<RegisterCoursesHandler<StudentStore, InMemoryDomainOutbox, InMemoryCourseCatalog>>,
    pub update_profile_handler: Arc<UpdateProfileHandler<StudentStore, InMemoryDomainOutbox>>,
    pub forgot_password_handler: Arc<ForgotPasswordHandler<StudentStore, InMemoryDomainOutbox>>,
    pub list_courses_handler: Arc<ListCoursesHandler<InMemoryCourseCatalog>>,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        event_store: Arc<StudentStore>,
        outbox: Arc<InMemoryDomainOutbox>,
        catalog: Arc<InMemoryCourseCatalog>,
        sessions: Arc<InMemorySessionStore>,
    ) -> Self {
        let topic = config.students_topic.as_str();
        let session_ttl_ms = config.session_ttl_ms();
        Self {
            sign_up_handler: Arc::new(SignUpHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
            )),
            log_in_handler: Arc::new(LogInHandler::new(
                event_store.clone(),
                sessions.clone(),
                session_ttl_ms,
            )),
            log_out_handler: Arc::new(LogOutHandler::new(sessions.clone())),
            get_student_handler: Arc::new(GetStudentHandler::new(event_store.clone())),
            register_courses_handler: Arc::new(
                RegisterCoursesHandler::new(
                    topic,
                    event_store.clone(),
                    outbox.clone(),
                    catalog.clone(),
                )
                .with_policy(config.unknown_course_policy)
                .with_max_conflict_retries(config.max_conflict_retries),
            ),
            update_profile_handler: Arc::new(UpdateProfileHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
            )),
            forgot_password_handler: Arc::new(ForgotPasswordHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
            )),
            list_courses_handler: Arc::new(ListCoursesHandler::new(catalog.clone())),
            event_store,
            outbox,
            catalog,
            sessions,
            session_ttl_ms,
        }
    }

    /// Fresh, empty in-memory stores. The catalog is not seeded here.
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryEventStore::new()),
            Arc::new(InMemoryDomainOutbox::new()),
            Arc::new(InMemoryCourseCatalog::new()),
            Arc::new(InMemorySessionStore::new()),
        )
    }
}
