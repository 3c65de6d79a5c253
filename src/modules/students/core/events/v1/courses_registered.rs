// Event payload: CoursesRegisteredV1.
//
// Purpose
// - Record a successful merge of submitted course codes into a student's set.
//
// Responsibilities
// - `added` holds the codes that were new to the set.
// - `registered_courses` is the full merged set, sorted. Evolve replaces the set with it.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoursesRegisteredV1 {
    pub reg_number: String,
    pub added: Vec<String>,
    pub registered_courses: Vec<String>,
    pub registered_at: i64,
}
