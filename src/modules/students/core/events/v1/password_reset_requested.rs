#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequestedV1 {
    pub reg_number: String,
    pub requested_at: i64,
}
