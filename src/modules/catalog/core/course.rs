use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "100")]
    L100,
    #[serde(rename = "200")]
    L200,
    #[serde(rename = "300")]
    L300,
    #[serde(rename = "400")]
    L400,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::L100 => "100",
            Level::L200 => "200",
            Level::L300 => "300",
            Level::L400 => "400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "first",
            Semester::Second => "second",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    Compulsory,
    Elective,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Compulsory => "Compulsory",
            CourseType::Elective => "Elective",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCourseFieldError {
    #[error("unknown level: {0}")]
    Level(String),

    #[error("unknown semester: {0}")]
    Semester(String),
}

impl FromStr for Level {
    type Err = ParseCourseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "100" => Ok(Level::L100),
            "200" => Ok(Level::L200),
            "300" => Ok(Level::L300),
            "400" => Ok(Level::L400),
            other => Err(ParseCourseFieldError::Level(other.to_string())),
        }
    }
}

impl FromStr for Semester {
    type Err = ParseCourseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Semester::First),
            "second" => Ok(Semester::Second),
            other => Err(ParseCourseFieldError::Semester(other.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(level, semester)` grouping key units are capped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bucket {
    pub level: Level,
    pub semester: Semester,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Level {} semester", self.level, self.semester)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub units: u32,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub level: Level,
    pub semester: Semester,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        units: u32,
        course_type: CourseType,
        level: Level,
        semester: Semester,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            units,
            course_type,
            level,
            semester,
        }
    }

    pub fn bucket(&self) -> Bucket {
        Bucket {
            level: self.level,
            semester: self.semester,
        }
    }
}

/// Optional equality filters over the catalog. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub level: Option<Level>,
    pub semester: Option<Semester>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        self.level.is_none_or(|level| level == course.level)
            && self.semester.is_none_or(|semester| semester == course.semester)
    }
}
