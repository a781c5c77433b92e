use std::sync::Arc;

use async_trait::async_trait;

use crate::authorizer::{
    domain::{
        model::{
            enums::{
                authorization_decision::AuthorizationDecision,
                authorizer_domain_error::AuthorizerDomainError,
            },
            queries::authorize_token_query::AuthorizeTokenQuery,
        },
        services::authorizer_query_service::AuthorizerQueryService,
    },
    interfaces::acl::authorizer_facade::AuthorizerFacade,
};

pub struct AuthorizerFacadeImpl {
    query_service: Arc<dyn AuthorizerQueryService>,
}

impl AuthorizerFacadeImpl {
    pub fn new(query_service: Arc<dyn AuthorizerQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl AuthorizerFacade for AuthorizerFacadeImpl {
    async fn authorize(
        &self,
        token: String,
        resource: String,
    ) -> Result<AuthorizationDecision, AuthorizerDomainError> {
        let query = AuthorizeTokenQuery::new(token, resource)?;
        self.query_service.handle_authorize(query).await
    }
}
