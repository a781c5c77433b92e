use std::fmt;

use crate::authorizer::domain::model::enums::authorizer_domain_error::AuthorizerDomainError;

/// Caller-supplied credential. Its structure belongs to the identity provider, so the
/// only local rule is that it is present. It is forwarded unchanged.
#[derive(Clone, Eq, PartialEq)]
pub struct OpaqueToken(String);

impl OpaqueToken {
    pub fn new(value: String) -> Result<Self, AuthorizerDomainError> {
        if value.trim().is_empty() {
            return Err(AuthorizerDomainError::InvalidToken);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OpaqueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueToken(<{} bytes>)", self.0.len())
    }
}
