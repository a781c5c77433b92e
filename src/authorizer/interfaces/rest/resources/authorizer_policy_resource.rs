use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatementResource {
    pub action: String,
    pub effect: String,
    pub resource: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocumentResource {
    pub version: String,
    pub statement: Vec<PolicyStatementResource>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerContextResource {
    pub anonymous_user_id: String,
}

/// Gateway authorizer output for an allowed request.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerPolicyResource {
    pub principal_id: String,
    pub policy_document: PolicyDocumentResource,
    pub context: AuthorizerContextResource,
}

impl AuthorizerPolicyResource {
    pub fn allow(principal_id: String, resource: String, anonymous_user_id: String) -> Self {
        Self {
            principal_id,
            policy_document: PolicyDocumentResource {
                version: POLICY_VERSION.to_string(),
                statement: vec![PolicyStatementResource {
                    action: INVOKE_ACTION.to_string(),
                    effect: "Allow".to_string(),
                    resource,
                }],
            },
            context: AuthorizerContextResource { anonymous_user_id },
        }
    }
}
