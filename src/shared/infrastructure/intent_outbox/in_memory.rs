use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    pub rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64)>>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending row and forget their keys. Duplicates are only
    /// detected among rows that have not been drained yet; the event store's
    /// version check already keeps delivered versions from being produced twice.
    pub async fn drain(&self) -> Vec<OutboxRow> {
        let rows = std::mem::take(&mut *self.rows.lock().await);
        let mut seen = self.seen.lock().await;
        for row in &rows {
            seen.remove(&(row.stream_id.clone(), row.stream_version));
        }
        rows
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        let key = (row.stream_id.clone(), row.stream_version);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
