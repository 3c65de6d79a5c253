use std::collections::BTreeSet;

pub const DEFAULT_DEPARTMENT: &str = "Computer Science";
pub const DEFAULT_COURSE_OF_STUDY: &str = "Computer Science";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub reg_number: String,
    pub name: String,
    pub password: String,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub age: Option<u32>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub department: String,
    pub course_of_study: String,
    pub registered_courses: BTreeSet<String>,
    pub signed_up_at: i64,
    pub updated_at: i64,
    pub password_reset_requested_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentState {
    None,
    Registered(Student),
}

impl StudentState {
    pub fn student(&self) -> Option<&Student> {
        match self {
            StudentState::None => None,
            StudentState::Registered(student) => Some(student),
        }
    }

    pub fn into_student(self) -> Option<Student> {
        match self {
            StudentState::None => None,
            StudentState::Registered(student) => Some(student),
        }
    }
}
