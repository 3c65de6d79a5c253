use crate::modules::students::core::reg_number::RegNumber;

/// Profile fields a student may change. Credentials and registered courses are not among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub age: Option<u32>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub department: Option<String>,
    pub course_of_study: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProfile {
    pub reg_number: RegNumber,
    pub changes: ProfileChanges,
    pub updated_at: i64,
}
