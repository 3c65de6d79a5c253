// Event payload: StudentSignedUpV1.
//
// Purpose
// - Record that a student account was created under a registration number.
//
// Versioning and evolution
// - Prefer adding fields. For breaking changes, create StudentSignedUpV2 in a new file
//   and add a new variant.
//
// Timestamps
// - All i64 values are epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentSignedUpV1 {
    pub reg_number: String,
    pub name: String,
    pub password: String,
    pub department: String,
    pub course_of_study: String,
    pub signed_up_at: i64,
}
