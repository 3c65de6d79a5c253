use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::evolve::evolve;
use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::core::state::StudentState;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};

pub fn stream_id(reg_number: &RegNumber) -> String {
    format!("Student-{reg_number}")
}

/// Folded state of a student stream together with the version it was read at.
#[derive(Debug, Clone)]
pub struct LoadedStudent {
    pub stream_id: String,
    pub version: i64,
    pub state: StudentState,
}

pub async fn load_student(
    event_store: &impl EventStore<StudentEvent>,
    reg_number: &RegNumber,
) -> Result<LoadedStudent, EventStoreError> {
    let stream_id = stream_id(reg_number);
    let stream = event_store.load(&stream_id).await?;
    let state = stream.events.into_iter().fold(StudentState::None, evolve);
    Ok(LoadedStudent {
        stream_id,
        version: stream.version,
        state,
    })
}
