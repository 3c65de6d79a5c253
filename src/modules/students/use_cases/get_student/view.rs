use crate::modules::students::core::state::Student;
use serde::{Deserialize, Serialize};

/// Public read shape of a student. The password never leaves the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub name: String,
    pub reg_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub department: String,
    pub course_of_study: String,
    pub registered_courses: Vec<String>,
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            reg_number: student.reg_number.clone(),
            email: student.email.clone(),
            contact: student.contact.clone(),
            age: student.age,
            address: student.address.clone(),
            state: student.state.clone(),
            department: student.department.clone(),
            course_of_study: student.course_of_study.clone(),
            registered_courses: student.registered_courses.iter().cloned().collect(),
        }
    }
}
