use async_trait::async_trait;

use crate::authorizer::domain::model::{
    enums::{
        authorization_decision::AuthorizationDecision,
        authorizer_domain_error::AuthorizerDomainError,
    },
    queries::authorize_token_query::AuthorizeTokenQuery,
};

/// `Deny` is a successful outcome; only a failed verification call is an error.
#[async_trait]
pub trait AuthorizerQueryService: Send + Sync {
    async fn handle_authorize(
        &self,
        query: AuthorizeTokenQuery,
    ) -> Result<AuthorizationDecision, AuthorizerDomainError>;
}
