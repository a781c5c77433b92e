use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::{
    authorizer::domain::{
        model::{
            enums::{
                authorization_decision::{AuthorizationDecision, AuthorizerContext},
                authorizer_domain_error::AuthorizerDomainError,
                claim_validation_policy::ClaimValidationPolicy,
            },
            queries::authorize_token_query::AuthorizeTokenQuery,
        },
        services::authorizer_query_service::AuthorizerQueryService,
    },
    identity_integration::interfaces::acl::identity_verification_facade::IdentityVerificationFacade,
};

pub struct AuthorizerQueryServiceImpl {
    identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
    claim_validation_policy: ClaimValidationPolicy,
}

impl AuthorizerQueryServiceImpl {
    pub fn new(identity_verification_facade: Arc<dyn IdentityVerificationFacade>) -> Self {
        Self::new_with_policy(identity_verification_facade, ClaimValidationPolicy::default())
    }

    pub fn new_with_policy(
        identity_verification_facade: Arc<dyn IdentityVerificationFacade>,
        claim_validation_policy: ClaimValidationPolicy,
    ) -> Self {
        Self {
            identity_verification_facade,
            claim_validation_policy,
        }
    }
}

#[async_trait]
impl AuthorizerQueryService for AuthorizerQueryServiceImpl {
    async fn handle_authorize(
        &self,
        query: AuthorizeTokenQuery,
    ) -> Result<AuthorizationDecision, AuthorizerDomainError> {
        debug!(resource = query.resource().value(), "verifying identity token");

        // One attempt per request. Every request re-verifies.
        let identity = self
            .identity_verification_facade
            .exchange_code(query.token().value())
            .await
            .map_err(|e| {
                error!(error = %e, "identity verification call failed");
                AuthorizerDomainError::IntegrationError(e.to_string())
            })?;

        if !self.claim_validation_policy.accepts(&identity.claims) {
            info!(
                user_id = identity.user_id.value(),
                claims = identity.claims.len(),
                policy = self.claim_validation_policy.as_str(),
                "identity has no valid claim, denying"
            );
            return Ok(AuthorizationDecision::Deny);
        }

        let user_id = identity.user_id.as_string();
        info!(
            user_id = user_id.as_str(),
            resource = query.resource().value(),
            "identity verified, allowing"
        );

        Ok(AuthorizationDecision::Allow {
            principal_id: user_id.clone(),
            resource: query.resource().value().to_string(),
            context: AuthorizerContext {
                anonymous_user_id: user_id,
            },
        })
    }
}
