use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::catalog::core::course::Course;
use crate::modules::catalog::use_cases::list_courses::filter::parse_filter;
use crate::shared::inbound::http_error::client_message;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCourse {
    pub code: String,
    pub title: String,
    pub units: u32,
    pub course_type: String,
    pub level: String,
    pub semester: String,
}

impl From<Course> for GqlCourse {
    fn from(c: Course) -> Self {
        Self {
            course_type: c.course_type.as_str().to_string(),
            level: c.level.as_str().to_string(),
            semester: c.semester.as_str().to_string(),
            code: c.code,
            title: c.title,
            units: c.units,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn courses(
        &self,
        context: &Context<'_>,
        level: Option<String>,
        semester: Option<String>,
    ) -> GqlResult<Vec<GqlCourse>> {
        let state = context.data_unchecked::<AppState>();
        let filter = parse_filter(level.as_deref(), semester.as_deref())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let courses = state
            .list_courses_handler
            .handle(filter)
            .await
            .map_err(|e| async_graphql::Error::new(client_message(&e)))?;
        Ok(courses.into_iter().map(Into::into).collect())
    }
}
