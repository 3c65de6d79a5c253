use crate::modules::students::adapters::outbound::intent_outbox::dispatch_committed_intents;
use crate::modules::students::adapters::outbound::student_stream::load_student;
use crate::modules::students::core::decision::Decision;
use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::use_cases::forgot_password::command::RequestPasswordReset;
use crate::modules::students::use_cases::forgot_password::decide::decide_request_password_reset;
use crate::shared::application_error::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct ForgotPasswordHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<StudentEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> ForgotPasswordHandler<TEventStore, TOutbox>
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

    pub async fn handle(&self, command: RequestPasswordReset) -> Result<(), ApplicationError> {
        let loaded = load_student(&*self.event_store, &command.reg_number).await?;
        match decide_request_password_reset(&loaded.state, command) {
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
                tracing::info!(stream_id = %loaded.stream_id, "password reset requested");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}

#[cfg(test)]
mod forgot_password_handler_tests {
    use super::*;
    use crate::modules::students::adapters::outbound::intent_outbox::PASSWORD_RESET_EVENT_TYPE;
    use crate::modules::students::core::decision::DecideError;
    use crate::modules::students::core::reg_number::RegNumber;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::student_signed_up_v1::make_student_signed_up_v1_event;
    use rstest::rstest;

    fn command(reg_number: &str) -> RequestPasswordReset {
        RequestPasswordReset {
            reg_number: RegNumber::parse(reg_number).unwrap(),
            requested_at: 1_700_000_900_000,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_the_request_and_queue_the_link() {
        let store = Arc::new(InMemoryEventStore::<StudentEvent>::new());
        store
            .append(
                "Student-2020/123456",
                0,
                &[StudentEvent::StudentSignedUpV1(make_student_signed_up_v1_event())],
            )
            .await
            .unwrap();
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let handler = ForgotPasswordHandler::new("students.v1", store.clone(), outbox.clone());

        handler.handle(command("2020/123456")).await.unwrap();
        handler.handle(command("2020/123456")).await.unwrap();

        assert_eq!(store.load("Student-2020/123456").await.unwrap().version, 3);
        let rows = outbox.drain().await;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.event_type == PASSWORD_RESET_EVENT_TYPE));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_an_unknown_registration_number() {
        let handler = ForgotPasswordHandler::new(
            "students.v1",
            Arc::new(InMemoryEventStore::<StudentEvent>::new()),
            Arc::new(InMemoryDomainOutbox::new()),
        );
        let result = handler.handle(command("2020/123456")).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::RegNumberNotFound))
        ));
        assert_eq!(result.unwrap_err().to_string(), "Registration number not found");
    }
}
