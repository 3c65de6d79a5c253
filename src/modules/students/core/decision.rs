use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::intents::StudentIntent;
use crate::modules::students::core::password_policy::WeakPassword;
use crate::modules::students::core::registration::RegistrationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Registration number already exists")]
    AlreadyExists,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Registration number not found")]
    RegNumberNotFound,

    #[error("Name is required")]
    BlankName,

    #[error(transparent)]
    WeakPassword(#[from] WeakPassword),

    #[error("Please select at least one course to register.")]
    NoCoursesSelected,

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("Invalid Registration Number or Password")]
    InvalidCredentials,
}

/// Outcome of a student decider. An accepted decision with no events is a no-op.
#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<StudentEvent>,
        intents: Vec<StudentIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn unchanged() -> Self {
        Decision::Accepted {
            events: Vec::new(),
            intents: Vec::new(),
        }
    }
}
