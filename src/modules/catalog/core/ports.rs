// Catalog port.
//
// Purpose
// - Resolve course codes to Course records and browse the catalog.
//
// Boundaries
// - `find` reports only the codes it knows; unknown codes are simply absent.

use crate::modules::catalog::core::course::{Course, CourseFilter};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid course {code}: {reason}")]
    InvalidCourse { code: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn find(&self, codes: &[String]) -> Result<Vec<Course>, CatalogError>;
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, CatalogError>;
    async fn upsert(&self, course: Course) -> Result<(), CatalogError>;
}
