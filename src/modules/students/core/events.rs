pub mod v1 {
    pub mod courses_registered;
    pub mod password_reset_requested;
    pub mod profile_updated;
    pub mod student_signed_up;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum StudentEvent {
    StudentSignedUpV1(v1::student_signed_up::StudentSignedUpV1),
    CoursesRegisteredV1(v1::courses_registered::CoursesRegisteredV1),
    ProfileUpdatedV1(v1::profile_updated::ProfileUpdatedV1),
    PasswordResetRequestedV1(v1::password_reset_requested::PasswordResetRequestedV1),
}
