use crate::modules::students::core::{
    decision::{DecideError, Decision},
    events::{StudentEvent, v1::profile_updated::ProfileUpdatedV1},
    intents::StudentIntent,
    state::StudentState,
};
use crate::modules::students::use_cases::update_profile::command::UpdateProfile;

pub fn decide_update_profile(state: &StudentState, command: UpdateProfile) -> Decision {
    let Some(student) = state.student() else {
        return Decision::Rejected {
            reason: DecideError::StudentNotFound,
        };
    };
    let changes = command.changes;
    if changes.is_empty() {
        return Decision::unchanged();
    }
    if changes.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
        return Decision::Rejected {
            reason: DecideError::BlankName,
        };
    }

    let payload = ProfileUpdatedV1 {
        reg_number: student.reg_number.clone(),
        name: changes.name.map(|name| name.trim().to_string()),
        email: changes.email,
        contact: changes.contact,
        age: changes.age,
        address: changes.address,
        state: changes.state,
        department: changes.department,
        course_of_study: changes.course_of_study,
        updated_at: command.updated_at,
    };
    Decision::Accepted {
        events: vec![StudentEvent::ProfileUpdatedV1(payload.clone())],
        intents: vec![StudentIntent::PublishProfileUpdated { payload }],
    }
}
