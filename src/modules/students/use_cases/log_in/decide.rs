use crate::modules::students::core::decision::DecideError;
use crate::modules::students::core::state::{Student, StudentState};

/// Passwords are compared verbatim.
pub fn authenticate<'a>(
    state: &'a StudentState,
    password: &str,
) -> Result<&'a Student, DecideError> {
    match state {
        StudentState::Registered(student) if student.password == password => Ok(student),
        _ => Err(DecideError::InvalidCredentials),
    }
}
