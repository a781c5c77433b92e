use crate::color_identification::domain::model::{
    enums::color_identification_domain_error::ColorIdentificationDomainError,
    value_objects::user_identity::UserIdentity,
};

#[derive(Clone, Debug)]
pub struct DeriveColorQuery {
    user_identity: UserIdentity,
}

impl DeriveColorQuery {
    pub fn new(user_identity: String) -> Result<Self, ColorIdentificationDomainError> {
        Ok(Self {
            user_identity: UserIdentity::new(user_identity)?,
        })
    }

    pub fn user_identity(&self) -> &UserIdentity {
        &self.user_identity
    }
}
