use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColorIdentityResponseResource {
    pub your_user_identity: String,
    /// 24-bit color, render as `#rrggbb`.
    pub your_color_identity: u32,
}
