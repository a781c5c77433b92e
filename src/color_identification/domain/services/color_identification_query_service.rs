use async_trait::async_trait;

use crate::color_identification::domain::model::{
    enums::color_identification_domain_error::ColorIdentificationDomainError,
    queries::derive_color_query::DeriveColorQuery,
    value_objects::{color_identifier::ColorIdentifier, user_identity::UserIdentity},
};

#[derive(Clone, Debug)]
pub struct ColorIdentificationResult {
    pub user_identity: UserIdentity,
    pub color_identifier: ColorIdentifier,
}

#[async_trait]
pub trait ColorIdentificationQueryService: Send + Sync {
    async fn handle_derive_color(
        &self,
        query: DeriveColorQuery,
    ) -> Result<ColorIdentificationResult, ColorIdentificationDomainError>;
}
