use crate::modules::catalog::core::course::{Course, CourseFilter};
use crate::modules::catalog::core::ports::CourseCatalog;
use crate::shared::application_error::ApplicationError;
use std::sync::Arc;

pub struct ListCoursesHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> ListCoursesHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, filter: CourseFilter) -> Result<Vec<Course>, ApplicationError> {
        Ok(self.catalog.list(&filter).await?)
    }
}
