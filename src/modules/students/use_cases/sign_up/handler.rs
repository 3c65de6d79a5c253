use crate::modules::students::adapters::outbound::intent_outbox::dispatch_committed_intents;
use crate::modules::students::adapters::outbound::student_stream::load_student;
use crate::modules::students::core::decision::Decision;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::use_cases::sign_up::command::SignUp;
use crate::modules::students::use_cases::sign_up::decide::decide_sign_up;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct SignUpHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> SignUpHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(&self, command: SignUp) -> Result<(), ApplicationError> {
        let loaded = load_student(&*self.event_store, &command.reg_number).await?;
        match decide_sign_up(&loaded.state, command) {
            Decision::Accepted { events, intents } => {
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
                tracing::info!(stream_id = %loaded.stream_id, "student signed up");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
