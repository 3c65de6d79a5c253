use crate::modules::students::core::{
    decision::{DecideError, Decision},
    events::{StudentEvent, v1::student_signed_up::StudentSignedUpV1},
    intents::StudentIntent,
    password_policy::check_password_strength,
    state::{DEFAULT_COURSE_OF_STUDY, DEFAULT_DEPARTMENT, StudentState},
};
use crate::modules::students::use_cases::sign_up::command::SignUp;

pub fn decide_sign_up(state: &StudentState, command: SignUp) -> Decision {
    let name = command.name.trim();
    if name.is_empty() {
        return Decision::Rejected {
            reason: DecideError::BlankName,
        };
    }
    if let Err(weak) = check_password_strength(&command.password) {
        return Decision::Rejected {
            reason: DecideError::WeakPassword(weak),
        };
    }
    match state {
        StudentState::None => {
            let payload = StudentSignedUpV1 {
                reg_number: command.reg_number.to_string(),
                name: name.to_string(),
                password: command.password,
                department: DEFAULT_DEPARTMENT.to_string(),
                course_of_study: DEFAULT_COURSE_OF_STUDY.to_string(),
                signed_up_at: command.signed_up_at,
            };
            Decision::Accepted {
                intents: vec![StudentIntent::PublishStudentSignedUp {
                    reg_number: payload.reg_number.clone(),
                    name: payload.name.clone(),
                    signed_up_at: payload.signed_up_at,
                }],
                events: vec![StudentEvent::StudentSignedUpV1(payload)],
            }
        }
        StudentState::Registered(_) => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}
