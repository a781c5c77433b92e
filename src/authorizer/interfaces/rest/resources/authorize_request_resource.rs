use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Token authorizer event as delivered by an API gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequestResource {
    #[serde(rename = "type", default = "default_event_type")]
    pub event_type: String,
    #[validate(length(min = 1))]
    pub authorization_token: String,
    #[validate(length(min = 1))]
    pub method_arn: String,
}

fn default_event_type() -> String {
    "TOKEN".to_string()
}
