use crate::modules::students::core::reg_number::RegNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPasswordReset {
    pub reg_number: RegNumber,
    pub requested_at: i64,
}
