#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationClaim {
    pub label: String,
    pub value: String,
    pub is_valid: bool,
    pub is_owner: bool,
}
