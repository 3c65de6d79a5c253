// Shared test fixture for the SignUp command, seeded from json/sign_up.json.

use crate::modules::students::core::reg_number::RegNumber;
use crate::modules::students::use_cases::sign_up::command::SignUp;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpDto {
    pub name: String,
    pub reg_number: String,
    pub password: String,
}

pub struct SignUpBuilder {
    inner: SignUp,
}

impl Default for SignUpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignUpBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/sign_up.json").unwrap();
        let dto: SignUpDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: SignUp {
                name: dto.name,
                reg_number: RegNumber::parse(dto.reg_number).unwrap(),
                password: dto.password,
                signed_up_at: 1_700_000_000_000,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn reg_number(mut self, v: &str) -> Self {
        self.inner.reg_number = RegNumber::parse(v).unwrap();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn signed_up_at(mut self, v: i64) -> Self {
        self.inner.signed_up_at = v;
        self
    }

    pub fn build(self) -> SignUp {
        self.inner
    }
}

#[cfg(test)]
mod sign_up_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SignUpBuilder::default().build();
        assert_eq!(built.name, "Ada Obi");
        assert_eq!(built.reg_number.as_str(), "2020/123456");
        assert_eq!(built.password, "Str0ng!Pass");
        assert_eq!(built.signed_up_at, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = SignUpBuilder::new()
            .name("Chidi Eze")
            .reg_number("2021/000001")
            .password("An0ther!Pass")
            .signed_up_at(42)
            .build();
        assert_eq!(built.name, "Chidi Eze");
        assert_eq!(built.reg_number.as_str(), "2021/000001");
        assert_eq!(built.password, "An0ther!Pass");
        assert_eq!(built.signed_up_at, 42);
    }
}
