use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid registration number {0:?}, expected YYYY/NNNNNN (e.g. 2020/123456)")]
pub struct InvalidRegNumber(pub String);

/// Student registration number, `YYYY/NNNNNN`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegNumber(String);

impl RegNumber {
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidRegNumber> {
        let raw = raw.into();
        let valid = match raw.split_once('/') {
            Some((year, serial)) => {
                year.len() == 4
                    && serial.len() == 6
                    && year.bytes().chain(serial.bytes()).all(|b| b.is_ascii_digit())
            }
            None => false,
        };
        if valid { Ok(Self(raw)) } else { Err(InvalidRegNumber(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegNumber {
    type Error = InvalidRegNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RegNumber> for String {
    fn from(value: RegNumber) -> Self {
        value.0
    }
}

impl fmt::Display for RegNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod reg_number_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2020/123456")]
    #[case("1999/000001")]
    fn it_should_accept_well_formed_numbers(#[case] raw: &str) {
        assert_eq!(RegNumber::parse(raw).unwrap().as_str(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("2020123456")]
    #[case("20/123456")]
    #[case("2020/12345")]
    #[case("2020/1234567")]
    #[case("20a0/123456")]
    #[case("2020/12345x")]
    #[case("2020/123/456")]
    #[case(" 2020/123456")]
    fn it_should_reject_malformed_numbers(#[case] raw: &str) {
        assert_eq!(RegNumber::parse(raw), Err(InvalidRegNumber(raw.to_string())));
    }

    #[rstest]
    fn it_should_deserialize_through_validation() {
        let ok: RegNumber = serde_json::from_str("\"2020/123456\"").unwrap();
        assert_eq!(ok.to_string(), "2020/123456");
        assert!(serde_json::from_str::<RegNumber>("\"nope\"").is_err());
    }
}
