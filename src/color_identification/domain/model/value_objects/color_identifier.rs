use crate::color_identification::domain::model::enums::color_identification_domain_error::ColorIdentificationDomainError;

pub const MAX_COLOR_IDENTIFIER: u32 = 0x00FF_FFFF;

/// 24-bit color derived from a user identity. Different users may share a color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ColorIdentifier(u32);

impl ColorIdentifier {
    pub fn new(value: u32) -> Result<Self, ColorIdentificationDomainError> {
        if value > MAX_COLOR_IDENTIFIER {
            return Err(ColorIdentificationDomainError::ColorOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// `#rrggbb`, zero padded.
    pub fn to_hex(&self) -> String {
        format!("#{:06x}", self.0)
    }
}
