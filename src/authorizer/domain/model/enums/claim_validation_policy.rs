use std::str::FromStr;

use crate::identity_integration::domain::model::value_objects::verification_claim::VerificationClaim;

/// How the claims returned by the identity provider are judged.
///
/// `FirstClaim` only looks at the primary verification level, which the provider
/// returns first. `AnyClaim` accepts the identity when any claim is valid and must be
/// opted into explicitly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ClaimValidationPolicy {
    #[default]
    FirstClaim,
    AnyClaim,
}

impl ClaimValidationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstClaim => "first",
            Self::AnyClaim => "any",
        }
    }

    pub fn accepts(&self, claims: &[VerificationClaim]) -> bool {
        match self {
            Self::FirstClaim => claims.first().is_some_and(|claim| claim.is_valid),
            Self::AnyClaim => claims.iter().any(|claim| claim.is_valid),
        }
    }
}

impl FromStr for ClaimValidationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "first" => Ok(Self::FirstClaim),
            "any" => Ok(Self::AnyClaim),
            other => Err(format!("unknown claim validation policy '{other}'")),
        }
    }
}
