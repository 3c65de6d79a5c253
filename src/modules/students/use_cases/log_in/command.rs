/// Credentials as submitted. The registration number is checked by lookup,
/// so a malformed one fails like a wrong one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogIn {
    pub reg_number: String,
    pub password: String,
    pub logged_in_at: i64,
}
