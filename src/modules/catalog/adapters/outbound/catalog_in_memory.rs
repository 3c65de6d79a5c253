use crate::modules::catalog::core::course::{Course, CourseFilter};
use crate::modules::catalog::core::ports::{CatalogError, CourseCatalog};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCourseCatalog {
    courses: RwLock<HashMap<String, Course>>,
    is_offline: bool,
}

impl InMemoryCourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.is_offline {
            return Err(CatalogError::Backend("Course catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CourseCatalog for InMemoryCourseCatalog {
    async fn find(&self, codes: &[String]) -> Result<Vec<Course>, CatalogError> {
        self.ensure_online()?;
        let guard = self.courses.read().await;
        let mut found: Vec<Course> = codes
            .iter()
            .filter_map(|code| guard.get(code).cloned())
            .collect();
        found.sort_by(|a, b| a.code.cmp(&b.code));
        found.dedup_by(|a, b| a.code == b.code);
        Ok(found)
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CatalogError> {
        self.ensure_online()?;
        let guard = self.courses.read().await;
        let mut items: Vec<Course> = guard
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            (a.level, a.semester, &a.code).cmp(&(b.level, b.semester, &b.code))
        });
        Ok(items)
    }

    async fn upsert(&self, course: Course) -> Result<(), CatalogError> {
        self.ensure_online()?;
        if course.units == 0 {
            return Err(CatalogError::InvalidCourse {
                code: course.code,
                reason: "units must be positive".into(),
            });
        }
        self.courses
            .write()
            .await
            .insert(course.code.clone(), course);
        Ok(())
    }
}
