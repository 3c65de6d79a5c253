use crate::modules::students::core::reg_number::RegNumber;

/// Submitted course codes may repeat; the decider collapses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCourses {
    pub reg_number: RegNumber,
    pub courses: Vec<String>,
    pub registered_at: i64,
}
