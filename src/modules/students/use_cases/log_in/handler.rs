use crate::modules::students::adapters::outbound::student_stream::load_student;
use crate::modules::students::core::decision::DecideError;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::modules::students::use_cases::log_in::command::LogIn;
use crate::modules::students::use_cases::log_in::decide::authenticate;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggedIn {
    pub student: StudentView,
    pub token: String,
    pub expires_at: i64,
}

pub struct LogInHandler<TEventStore, TSessions>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TSessions: SessionStore + 'static,
{
    event_store: Arc<TEventStore>,
    sessions: Arc<TSessions>,
    session_ttl_ms: i64,
}

impl<TEventStore, TSessions> LogInHandler<TEventStore, TSessions>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TSessions: SessionStore + 'static,
{
    pub fn new(
        event_store: Arc<TEventStore>,
        sessions: Arc<TSessions>,
        session_ttl_ms: i64,
    ) -> Self {
        Self {
            event_store,
            sessions,
            session_ttl_ms,
        }
    }

    pub async fn handle(&self, command: LogIn) -> Result<LoggedIn, ApplicationError> {
        let reg_number = RegNumber::parse(command.reg_number)
            .map_err(|_| ApplicationError::Domain(DecideError::InvalidCredentials))?;
        let loaded = load_student(&*self.event_store, &reg_number).await?;
        let student = authenticate(&loaded.state, &command.password)?;

        let session = self
            .sessions
            .create(&student.reg_number, command.logged_in_at, self.session_ttl_ms)
            .await?;
        tracing::info!(reg_number = %student.reg_number, "student logged in");
        Ok(LoggedIn {
            student: StudentView::from(student),
            token: session.token,
            expires_at: session.expires_at,
        })
    }
}
