use crate::authorizer::domain::model::{
    enums::authorizer_domain_error::AuthorizerDomainError,
    value_objects::{opaque_token::OpaqueToken, resource_identifier::ResourceIdentifier},
};

#[derive(Clone, Debug)]
pub struct AuthorizeTokenQuery {
    token: OpaqueToken,
    resource: ResourceIdentifier,
}

impl AuthorizeTokenQuery {
    pub fn new(token: String, resource: String) -> Result<Self, AuthorizerDomainError> {
        Ok(Self {
            token: OpaqueToken::new(token)?,
            resource: ResourceIdentifier::new(resource)?,
        })
    }

    pub fn token(&self) -> &OpaqueToken {
        &self.token
    }

    pub fn resource(&self) -> &ResourceIdentifier {
        &self.resource
    }
}
