use crate::modules::students::adapters::outbound::student_stream::load_student;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct GetStudentHandler<TEventStore>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> GetStudentHandler<TEventStore>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Folds the student's stream. `None` when no student signed up under the number.
    pub async fn handle(
        &self,
        reg_number: &RegNumber,
    ) -> Result<Option<StudentView>, ApplicationError> {
        let loaded = load_student(&*self.event_store, reg_number).await?;
        Ok(loaded.state.student().map(StudentView::from))
    }
}
