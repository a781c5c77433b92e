use async_trait::async_trait;

use crate::authorizer::domain::model::enums::{
    authorization_decision::AuthorizationDecision, authorizer_domain_error::AuthorizerDomainError,
};

/// Entry point for other contexts that need a request gated by the authorizer.
#[async_trait]
pub trait AuthorizerFacade: Send + Sync {
    async fn authorize(
        &self,
        token: String,
        resource: String,
    ) -> Result<AuthorizationDecision, AuthorizerDomainError>;
}
