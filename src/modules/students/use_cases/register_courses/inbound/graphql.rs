use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::get_student::view::StudentView;
use crate::modules::students::use_cases::register_courses::command::RegisterCourses;
use crate::shared::inbound::http_error::client_message;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlStudent {
    pub name: String,
    pub reg_number: String,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub age: Option<u32>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub department: String,
    pub course_of_study: String,
    pub registered_courses: Vec<String>,
}

impl From<StudentView> for GqlStudent {
    fn from(v: StudentView) -> Self {
        Self {
            name: v.name,
            reg_number: v.reg_number,
            email: v.email,
            contact: v.contact,
            age: v.age,
            address: v.address,
            state: v.state,
            department: v.department,
            course_of_study: v.course_of_study,
            registered_courses: v.registered_courses,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register_courses(
        &self,
        context: &Context<'_>,
        reg_number: String,
        courses: Vec<String>,
    ) -> GqlResult<GqlStudent> {
        let state = context.data_unchecked::<AppState>();
        let reg_number =
            RegNumber::parse(reg_number).map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let command = RegisterCourses {
            reg_number,
            courses,
            registered_at: Utc::now().timestamp_millis(),
        };

        let student = state
            .register_courses_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(client_message(&e)))?;
        Ok(student.into())
    }
}
