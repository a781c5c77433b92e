use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::color_identification::domain::{
    model::{
        enums::color_identification_domain_error::ColorIdentificationDomainError,
        queries::derive_color_query::DeriveColorQuery,
        value_objects::{color_identifier::ColorIdentifier, color_secret::ColorSecret},
    },
    services::color_identification_query_service::{
        ColorIdentificationQueryService, ColorIdentificationResult,
    },
};

const COLOR_HEX_DIGITS: usize = 6;

pub struct ColorIdentificationQueryServiceImpl {
    secret: ColorSecret,
}

impl ColorIdentificationQueryServiceImpl {
    pub fn new(secret: ColorSecret) -> Self {
        Self { secret }
    }

    /// SHA-256 over the secret followed by the user id, no separator. The last six hex
    /// digits of the digest become the color.
    ///
    /// Byte order and the missing separator are load-bearing: changing either changes
    /// every color already handed out.
    pub fn derive_color(
        secret: &ColorSecret,
        user_identity: &str,
    ) -> Result<ColorIdentifier, ColorIdentificationDomainError> {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(user_identity.as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        let tail = digest
            .get(digest.len().saturating_sub(COLOR_HEX_DIGITS)..)
            .filter(|tail| tail.len() == COLOR_HEX_DIGITS)
            .ok_or_else(|| {
                ColorIdentificationDomainError::HashingError("digest is too short".to_string())
            })?;

        let value = u32::from_str_radix(tail, 16)
            .map_err(|e| ColorIdentificationDomainError::HashingError(e.to_string()))?;

        ColorIdentifier::new(value)
    }
}

#[async_trait]
impl ColorIdentificationQueryService for ColorIdentificationQueryServiceImpl {
    async fn handle_derive_color(
        &self,
        query: DeriveColorQuery,
    ) -> Result<ColorIdentificationResult, ColorIdentificationDomainError> {
        let color_identifier = Self::derive_color(&self.secret, query.user_identity().value())?;

        info!(
            user_id = query.user_identity().value(),
            color_id = color_identifier.value(),
            color = color_identifier.to_hex().as_str(),
            "derived color identity"
        );

        Ok(ColorIdentificationResult {
            user_identity: query.user_identity().clone(),
            color_identifier,
        })
    }
}
