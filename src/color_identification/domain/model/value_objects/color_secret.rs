use std::fmt;

use crate::color_identification::domain::model::enums::color_identification_domain_error::ColorIdentificationDomainError;

#[derive(Clone)]
pub struct ColorSecret(String);

impl ColorSecret {
    pub fn new(value: String) -> Result<Self, ColorIdentificationDomainError> {
        if value.is_empty() {
            return Err(ColorIdentificationDomainError::InvalidColorSecret);
        }
        Ok(Self(value))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ColorSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColorSecret(<redacted>)")
    }
}
