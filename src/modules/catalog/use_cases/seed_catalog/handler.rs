use crate::modules::catalog::core::course::Course;
use crate::modules::catalog::core::ports::{CatalogError, CourseCatalog};
use std::sync::Arc;

pub struct SeedCatalogHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> SeedCatalogHandler<TCatalog>
where
    TCatalog: CourseCatalog + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    /// Upserts every course by code and returns how many were written.
    pub async fn handle(&self, courses: Vec<Course>) -> Result<usize, CatalogError> {
        let count = courses.len();
        for course in courses {
            self.catalog.upsert(course).await?;
        }
        tracing::info!(count, "course catalog seeded");
        Ok(count)
    }
}
