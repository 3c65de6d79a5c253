use crate::modules::students::adapters::outbound::intent_outbox::PASSWORD_RESET_EVENT_TYPE;
use crate::shared::infrastructure::intent_outbox::OutboxRow;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Drain whatever is pending and log it. Returns how many rows were relayed.
pub async fn relay_pending(outbox: &InMemoryDomainOutbox) -> usize {
    let rows = outbox.drain().await;
    for row in &rows {
        relay(row);
    }
    rows.len()
}

fn relay(row: &OutboxRow) {
    if row.event_type == PASSWORD_RESET_EVENT_TYPE {
        // No mail transport; the link is only logged.
        let reg_number = row.payload["regNumber"].as_str().unwrap_or_default();
        tracing::info!(
            reg_number,
            stream_id = %row.stream_id,
            "password reset link dispatched"
        );
        return;
    }
    tracing::info!(
        topic = %row.topic,
        event_type = %row.event_type,
        stream_id = %row.stream_id,
        stream_version = row.stream_version,
        "outbox row relayed"
    );
}

pub fn spawn_outbox_relay(outbox: Arc<InMemoryDomainOutbox>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let relayed = relay_pending(&outbox).await;
            if relayed > 0 {
                tracing::debug!(relayed, "outbox relay tick");
            }
        }
    })
}

#[cfg(test)]
mod workers_tests {
    use super::*;
    use crate::shared::infrastructure::intent_outbox::DomainOutbox;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> OutboxRow {
        OutboxRow {
            topic: "students.v1".into(),
            event_type: PASSWORD_RESET_EVENT_TYPE.into(),
            event_version: 1,
            stream_id: "Student-2020/123456".into(),
            stream_version: 2,
            occurred_at: 1_700_000_900_000,
            payload: serde_json::json!({
                "regNumber": "2020/123456",
                "requestedAt": 1_700_000_900_000i64,
            }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drain_pending_rows(row: OutboxRow) {
        let outbox = InMemoryDomainOutbox::new();
        outbox.enqueue(row).await.unwrap();

        assert_eq!(relay_pending(&outbox).await, 1);
        assert_eq!(relay_pending(&outbox).await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_relay_in_the_background(row: OutboxRow) {
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        outbox.enqueue(row).await.unwrap();

        let handle = spawn_outbox_relay(outbox.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();

        assert!(outbox.rows.lock().await.is_empty());
    }
}
