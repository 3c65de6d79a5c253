use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;
const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRequirement {
    pub fn describe(&self) -> String {
        match self {
            PasswordRequirement::MinLength => format!("at least {MIN_PASSWORD_LENGTH} characters"),
            PasswordRequirement::Uppercase => "at least one uppercase letter (A-Z)".into(),
            PasswordRequirement::Lowercase => "at least one lowercase letter (a-z)".into(),
            PasswordRequirement::Digit => "at least one number (0-9)".into(),
            PasswordRequirement::SpecialCharacter => {
                "at least one special character (!@#$...)".into()
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("password does not meet requirements: {}", describe_all(.0.as_slice()))]
pub struct WeakPassword(pub Vec<PasswordRequirement>);

fn describe_all(unmet: &[PasswordRequirement]) -> String {
    unmet
        .iter()
        .map(PasswordRequirement::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Signup strength rules. Passwords are stored as given; no hashing happens here.
pub fn check_password_strength(password: &str) -> Result<(), WeakPassword> {
    let mut unmet = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        unmet.push(PasswordRequirement::MinLength);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        unmet.push(PasswordRequirement::Uppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        unmet.push(PasswordRequirement::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        unmet.push(PasswordRequirement::Digit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        unmet.push(PasswordRequirement::SpecialCharacter);
    }
    if unmet.is_empty() { Ok(()) } else { Err(WeakPassword(unmet)) }
}
