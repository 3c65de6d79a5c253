use crate::modules::students::core::events::v1::{
    courses_registered::CoursesRegisteredV1, password_reset_requested::PasswordResetRequestedV1,
    profile_updated::ProfileUpdatedV1,
};

/// Domain intents produced by a decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentIntent {
    /// Sign-up notice without the credential.
    PublishStudentSignedUp {
        reg_number: String,
        name: String,
        signed_up_at: i64,
    },
    PublishCoursesRegistered { payload: CoursesRegisteredV1 },
    PublishProfileUpdated { payload: ProfileUpdatedV1 },
    SendPasswordResetLink { payload: PasswordResetRequestedV1 },
}
