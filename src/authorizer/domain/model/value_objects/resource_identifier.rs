use crate::authorizer::domain::model::enums::authorizer_domain_error::AuthorizerDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier(String);

impl ResourceIdentifier {
    pub fn new(value: String) -> Result<Self, AuthorizerDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AuthorizerDomainError::InvalidResource);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
