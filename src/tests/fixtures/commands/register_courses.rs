// Shared test fixture for the RegisterCourses command, seeded from json/register_courses.json.

use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::register_courses::command::RegisterCourses;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCoursesDto {
    pub reg_number: String,
    pub courses: Vec<String>,
}

pub struct RegisterCoursesBuilder {
    inner: RegisterCourses,
}

impl Default for RegisterCoursesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterCoursesBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_courses.json").unwrap();
        let dto: RegisterCoursesDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterCourses {
                reg_number: RegNumber::parse(dto.reg_number).unwrap(),
                courses: dto.courses,
                registered_at: 1_700_000_100_000,
            },
        }
    }

    pub fn reg_number(mut self, v: &str) -> Self {
        self.inner.reg_number = RegNumber::parse(v).unwrap();
        self
    }

    pub fn courses(mut self, v: Vec<String>) -> Self {
        self.inner.courses = v;
        self
    }

    pub fn registered_at(mut self, v: i64) -> Self {
        self.inner.registered_at = v;
        self
    }

    pub fn build(self) -> RegisterCourses {
        self.inner
    }
}
