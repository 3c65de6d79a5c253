use crate::modules::students::core::{
    decision::{DecideError, Decision},
    events::{StudentEvent, v1::password_reset_requested::PasswordResetRequestedV1},
    intents::StudentIntent,
    state::StudentState,
};
use crate::modules::students::use_cases::forgot_password::command::RequestPasswordReset;

pub fn decide_request_password_reset(
    state: &StudentState,
    command: RequestPasswordReset,
) -> Decision {
    match state {
        StudentState::Registered(student) => {
            let payload = PasswordResetRequestedV1 {
                reg_number: student.reg_number.clone(),
                requested_at: command.requested_at,
            };
            Decision::Accepted {
                events: vec![StudentEvent::PasswordResetRequestedV1(payload.clone())],
                intents: vec![StudentIntent::SendPasswordResetLink { payload }],
            }
        }
        StudentState::None => Decision::Rejected {
            reason: DecideError::RegNumberNotFound,
        },
    }
}
