use crate::modules::students::core::intents::StudentIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::Serialize;

pub const PASSWORD_RESET_EVENT_TYPE: &str = "PasswordResetRequested";

fn to_payload(value: impl Serialize) -> Result<serde_json::Value, OutboxError> {
    serde_json::to_value(value).map_err(|e| OutboxError::Validation(e.to_string()))
}

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<StudentIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            StudentIntent::PublishStudentSignedUp {
                reg_number,
                name,
                signed_up_at,
            } => (
                "StudentSignedUp",
                signed_up_at,
                serde_json::json!({ "regNumber": reg_number, "name": name }),
            ),
            StudentIntent::PublishCoursesRegistered { payload } => {
                ("CoursesRegistered", payload.registered_at, to_payload(payload)?)
            }
            StudentIntent::PublishProfileUpdated { payload } => {
                ("ProfileUpdated", payload.updated_at, to_payload(payload)?)
            }
            StudentIntent::SendPasswordResetLink { payload } => {
                (PASSWORD_RESET_EVENT_TYPE, payload.requested_at, to_payload(payload)?)
            }
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

/// Dispatch intents whose events are already appended. The append cannot be
/// undone, so a failed enqueue is logged and the command still succeeds.
pub async fn dispatch_committed_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<StudentIntent>,
) {
    let result = dispatch_intents(outbox, stream_id, starting_version, topic, intents).await;
    if let Err(error) = result {
        tracing::error!(
            %error,
            stream_id,
            starting_version,
            "outbox enqueue failed after the events were committed"
        );
    }
}
