use crate::modules::catalog::core::course::{CourseFilter, Level, ParseCourseFieldError, Semester};

// Placeholder option values the course picker submits before a choice is made.
const LEVEL_PLACEHOLDER: &str = "chooseLevel";
const SEMESTER_PLACEHOLDER: &str = "chooseSemester";

/// Build a filter from raw query values. Missing, empty and placeholder values
/// leave that field unfiltered.
pub fn parse_filter(
    level: Option<&str>,
    semester: Option<&str>,
) -> Result<CourseFilter, ParseCourseFieldError> {
    let level = match level.map(str::trim) {
        None | Some("") | Some(LEVEL_PLACEHOLDER) => None,
        Some(raw) => Some(raw.parse::<Level>()?),
    };
    let semester = match semester.map(str::trim) {
        None | Some("") | Some(SEMESTER_PLACEHOLDER) => None,
        Some(raw) => Some(raw.parse::<Semester>()?),
    };
    Ok(CourseFilter { level, semester })
}
