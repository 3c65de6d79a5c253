use crate::modules::catalog::adapters::outbound::catalog_in_memory::InMemoryCourseCatalog;
use crate::modules::catalog::core::ports::CourseCatalog;
use crate::modules::catalog::core::seed::default_courses;

pub async fn seeded_catalog() -> InMemoryCourseCatalog {
    let catalog = InMemoryCourseCatalog::new();
    for course in default_courses() {
        catalog.upsert(course).await.unwrap();
    }
    catalog
}
