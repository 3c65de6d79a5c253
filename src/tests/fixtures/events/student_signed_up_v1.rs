use crate::modules::students::core::events::v1::student_signed_up::StudentSignedUpV1;
use crate::modules::students::core::state::{DEFAULT_COURSE_OF_STUDY, DEFAULT_DEPARTMENT};
use crate::tests::fixtures::commands::sign_up::SignUpBuilder;

/// Canonical signup event, derived from the SignUp fixture.
pub fn make_student_signed_up_v1_event() -> StudentSignedUpV1 {
    let command = SignUpBuilder::new().build();
    StudentSignedUpV1 {
        reg_number: command.reg_number.to_string(),
        name: command.name,
        password: command.password,
        department: DEFAULT_DEPARTMENT.to_string(),
        course_of_study: DEFAULT_COURSE_OF_STUDY.to_string(),
        signed_up_at: command.signed_up_at,
    }
}
