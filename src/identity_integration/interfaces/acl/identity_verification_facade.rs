use async_trait::async_trait;

use crate::identity_integration::domain::model::value_objects::{
    anonymous_user_id::AnonymousUserId, verification_claim::VerificationClaim,
};

/// Result of a successful code exchange with the identity provider.
///
/// Claims keep the order the provider returned them in; the primary verification
/// level is expected first.
#[derive(Clone, Debug)]
pub struct VerifiedIdentity {
    pub user_id: AnonymousUserId,
    pub claims: Vec<VerificationClaim>,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityIntegrationError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed identity provider response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait IdentityVerificationFacade: Send + Sync {
    async fn exchange_code(&self, token: &str)
    -> Result<VerifiedIdentity, IdentityIntegrationError>;
}
