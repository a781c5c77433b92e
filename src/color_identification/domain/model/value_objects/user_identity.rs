use crate::color_identification::domain::model::enums::color_identification_domain_error::ColorIdentificationDomainError;

/// Anonymous user id handed over by the authorizer. Not re-verified here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(value: String) -> Result<Self, ColorIdentificationDomainError> {
        if value.trim().is_empty() {
            return Err(ColorIdentificationDomainError::InvalidUserIdentity);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
